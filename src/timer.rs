use crate::error::AssistantError;
use crate::types::{TimeUnit, TimerEntry, TimerState};
use chrono::{DateTime, Duration, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::Cell;
use std::rc::Rc;
use tracing::info;

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*((?:minute|min|hour|hr|second|sec)s?)").expect("valid duration pattern")
});

// =============================================================================
// Clock
// =============================================================================

/// Source of the current wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to. Clones share the same instant.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, instant: DateTime<Local>) {
        self.now.set(instant);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

// =============================================================================
// Notification channel
// =============================================================================

/// Receives one call per fired timer. Delivery problems stay inside the
/// implementation.
pub trait Notifier {
    fn timer_complete(&self, amount: u64, unit: &str);
}

/// Human-readable completion message
pub fn completion_message(amount: u64, unit: &str) -> String {
    format!(
        "Timer complete! Your timer for {} {} has finished.",
        amount, unit
    )
}

/// Records completions in the log only
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn timer_complete(&self, amount: u64, unit: &str) {
        info!(amount, unit, "timer complete");
    }
}

// =============================================================================
// Timers
// =============================================================================

/// Amount and unit parsed out of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationSpec {
    pub amount: u64,
    pub unit: TimeUnit,
    pub unit_text: String,
}

impl DurationSpec {
    pub fn millis(&self) -> u64 {
        self.amount.saturating_mul(self.unit.millis())
    }
}

/// Find the first `<integer> <unit>` in the command
pub fn parse_duration(command: &str) -> Result<DurationSpec, AssistantError> {
    let caps = DURATION_RE
        .captures(command)
        .ok_or(AssistantError::MissingDuration)?;

    let amount = caps[1]
        .parse::<u64>()
        .map_err(|_| AssistantError::MissingDuration)?;
    let unit_text = caps[2].to_string();

    Ok(DurationSpec {
        amount,
        unit: TimeUnit::from_text(&unit_text),
        unit_text,
    })
}

/// Scheduled one-shot timers, fired by polling against a clock
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<TimerEntry>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a timer for the parsed duration, counted from `now`.
    /// Returns None when the due instant falls outside the representable
    /// calendar.
    pub fn schedule(&mut self, spec: DurationSpec, now: DateTime<Local>) -> Option<&TimerEntry> {
        let duration_ms = spec.millis();
        let offset = Duration::milliseconds(i64::try_from(duration_ms).unwrap_or(i64::MAX));
        let due_at = now.checked_add_signed(offset)?;

        self.next_id += 1;
        let entry = TimerEntry {
            id: self.next_id,
            amount: spec.amount,
            unit: spec.unit,
            unit_text: spec.unit_text,
            duration_ms,
            created_at: now,
            due_at,
            state: TimerState::Scheduled,
        };

        info!(
            id = entry.id,
            duration_ms,
            due_at = %entry.due_at.to_rfc3339(),
            "timer scheduled"
        );

        self.timers.push(entry);
        self.timers.last()
    }

    /// Fire every timer due at `now`, in creation order. Returns how many fired.
    pub fn fire_due(&mut self, now: DateTime<Local>, notifier: &dyn Notifier) -> usize {
        let mut fired = 0;
        for timer in self.timers.iter_mut().filter(|t| t.is_due(now)) {
            timer.state = TimerState::Fired;
            info!(id = timer.id, "timer fired");
            notifier.timer_complete(timer.amount, &timer.unit_text);
            fired += 1;
        }
        fired
    }

    /// Earliest due instant among timers that have not fired
    pub fn next_due(&self) -> Option<DateTime<Local>> {
        self.pending().map(|t| t.due_at).min()
    }

    pub fn pending(&self) -> impl Iterator<Item = &TimerEntry> {
        self.timers
            .iter()
            .filter(|t| t.state == TimerState::Scheduled)
    }

    pub fn all(&self) -> &[TimerEntry] {
        &self.timers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(u64, String)>>,
    }

    impl Notifier for Recorder {
        fn timer_complete(&self, amount: u64, unit: &str) {
            self.calls.borrow_mut().push((amount, unit.to_string()));
        }
    }

    fn start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_parse_duration() {
        let spec = parse_duration("set timer for 5 minutes").unwrap();
        assert_eq!(spec.amount, 5);
        assert_eq!(spec.unit, TimeUnit::Minute);
        assert_eq!(spec.unit_text, "minutes");
        assert_eq!(spec.millis(), 300_000);

        let spec = parse_duration("alarm in 2hr").unwrap();
        assert_eq!(spec.unit, TimeUnit::Hour);
        assert_eq!(spec.millis(), 7_200_000);

        let spec = parse_duration("remind me in 30 sec").unwrap();
        assert_eq!(spec.unit, TimeUnit::Second);
        assert_eq!(spec.millis(), 30_000);
    }

    #[test]
    fn test_parse_takes_first_match() {
        let spec = parse_duration("timer 10 min then 3 hours").unwrap();
        assert_eq!(spec.amount, 10);
        assert_eq!(spec.unit_text, "min");
    }

    #[test]
    fn test_missing_duration() {
        assert_eq!(
            parse_duration("remind me").unwrap_err(),
            AssistantError::MissingDuration
        );
        assert_eq!(
            parse_duration("timer for five minutes").unwrap_err(),
            AssistantError::MissingDuration
        );
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut queue = TimerQueue::new();
        let recorder = Recorder::default();
        let now = start();

        let entry = queue.schedule(parse_duration("5 minutes").unwrap(), now).unwrap();
        assert_eq!(entry.duration_ms, 300_000);
        assert_eq!(entry.due_at, now + Duration::milliseconds(300_000));

        assert_eq!(queue.fire_due(now + Duration::seconds(299), &recorder), 0);
        assert_eq!(queue.fire_due(now + Duration::seconds(300), &recorder), 1);
        assert_eq!(queue.fire_due(now + Duration::seconds(900), &recorder), 0);

        assert_eq!(*recorder.calls.borrow(), vec![(5, "minutes".to_string())]);
        assert_eq!(queue.all()[0].state, TimerState::Fired);
        assert!(queue.next_due().is_none());
    }

    #[test]
    fn test_fires_in_creation_order() {
        let mut queue = TimerQueue::new();
        let recorder = Recorder::default();
        let now = start();

        queue.schedule(parse_duration("1 hour").unwrap(), now).unwrap();
        queue.schedule(parse_duration("10 sec").unwrap(), now).unwrap();
        assert_eq!(queue.next_due(), Some(now + Duration::seconds(10)));

        assert_eq!(queue.fire_due(now + Duration::hours(2), &recorder), 2);
        assert_eq!(
            *recorder.calls.borrow(),
            vec![(1, "hour".to_string()), (10, "sec".to_string())]
        );
    }

    #[test]
    fn test_unrepresentable_due_instant() {
        let mut queue = TimerQueue::new();
        let spec = parse_duration("18446744073709551615 hours").unwrap();
        assert!(queue.schedule(spec, start()).is_none());
        assert!(queue.all().is_empty());
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(start());
        let other = clock.clone();
        clock.advance(Duration::minutes(5));
        assert_eq!(other.now(), start() + Duration::minutes(5));
    }

    #[test]
    fn test_manual_clock_jump_fires_timer() {
        let clock = ManualClock::new(start());
        let mut queue = TimerQueue::new();
        let recorder = Recorder::default();

        queue.schedule(parse_duration("2 hours").unwrap(), clock.now()).unwrap();
        clock.set(start() + Duration::hours(1));
        assert_eq!(queue.fire_due(clock.now(), &recorder), 0);

        clock.set(start() + Duration::hours(2));
        assert_eq!(clock.now(), start() + Duration::hours(2));
        assert_eq!(queue.fire_due(clock.now(), &recorder), 1);
    }

    #[test]
    fn test_completion_message() {
        assert_eq!(
            completion_message(5, "minutes"),
            "Timer complete! Your timer for 5 minutes has finished."
        );
    }
}
