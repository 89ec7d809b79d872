use crate::calc::{format_number, Calculator};
use crate::classify::{classify, normalize};
use crate::error::AssistantError;
use crate::format::{format_long_date, format_time};
use crate::notes::{extract_note_content, load_notes, save_notes, NoteStore};
use crate::responses::{pool_for, ResponseSelector};
use crate::timer::{parse_duration, Clock, LogNotifier, Notifier, SystemClock, TimerQueue};
use crate::types::{Calculation, Category, NoteEntry, TimerEntry};
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

/// The offline assistant: classifies commands and owns notes, timers and
/// calculation history
pub struct Assistant {
    notes: Vec<NoteEntry>,
    timers: TimerQueue,
    calculator: Calculator,
    selector: ResponseSelector,
    store: Box<dyn NoteStore>,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
}

impl Assistant {
    /// Create an assistant, loading any notes already in the store
    pub fn new(store: Box<dyn NoteStore>) -> Self {
        let notes = load_notes(store.as_ref());
        debug!(count = notes.len(), "loaded notes");

        Self {
            notes,
            timers: TimerQueue::new(),
            calculator: Calculator::new(),
            selector: ResponseSelector::new(),
            store,
            notifier: Box::new(LogNotifier),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_selector(mut self, selector: ResponseSelector) -> Self {
        self.selector = selector;
        self
    }

    // =========================================================================
    // Command surface
    // =========================================================================

    /// Answer one command. Never fails: every problem becomes a response.
    pub fn process_command(&mut self, text: &str) -> String {
        let command = normalize(text);
        let category = classify(&command);
        debug!(%category, command = %command, "classified command");

        match category {
            Category::Time => self.time_response(),
            Category::Date => self.date_response(),
            Category::Calculation => match self.evaluate(&command) {
                Ok(calc) => format!(
                    "The calculation result is: {}. {}",
                    format_number(calc.value),
                    calc.trace
                ),
                Err(e) => e.to_string(),
            },
            Category::Timer => match self.create_timer(&command) {
                Ok(timer) => format!(
                    "Timer set for {} {}. I'll notify you when it's done.",
                    timer.amount, timer.unit_text
                ),
                Err(e) => e.to_string(),
            },
            Category::Note => match self.add_note(&command) {
                Ok(note) => format!(
                    "I've noted: \"{}\". I'll remember this for you.",
                    note.content
                ),
                Err(e) => e.to_string(),
            },
            Category::Greeting | Category::Joke | Category::Weather | Category::Unknown => {
                self.canned_response(category)
            }
        }
    }

    fn canned_response(&mut self, category: Category) -> String {
        pool_for(category)
            .and_then(|pool| self.selector.pick(pool))
            .unwrap_or_default()
            .to_string()
    }

    fn time_response(&self) -> String {
        format!("The current time is {}.", format_time(&self.clock.now()))
    }

    fn date_response(&self) -> String {
        format!("Today is {}.", format_long_date(&self.clock.now()))
    }

    // =========================================================================
    // Stateful handlers
    // =========================================================================

    /// Evaluate arithmetic in the command, recording it in the history
    pub fn evaluate(&mut self, command: &str) -> Result<Calculation, AssistantError> {
        self.calculator.evaluate(command)
    }

    /// Schedule a timer from a duration in the command
    pub fn create_timer(&mut self, command: &str) -> Result<&TimerEntry, AssistantError> {
        let spec = parse_duration(command)?;
        let now = self.clock.now();
        self.timers
            .schedule(spec, now)
            .ok_or(AssistantError::MissingDuration)
    }

    /// Capture a note and write the full list back to the store
    pub fn add_note(&mut self, command: &str) -> Result<&NoteEntry, AssistantError> {
        let content = extract_note_content(command)?;

        self.notes.push(NoteEntry {
            content,
            timestamp: self.clock.now().to_rfc3339(),
        });

        match save_notes(self.store.as_mut(), &self.notes) {
            Ok(()) => info!(count = self.notes.len(), "notes saved"),
            Err(e) => warn!(error = %e, "failed to save notes"),
        }

        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Drop every note, in memory and in the store
    pub fn clear_notes(&mut self) {
        self.notes.clear();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear stored notes");
        }
    }

    /// Fire timers that are due now. Returns how many fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        self.timers.fire_due(now, self.notifier.as_ref())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn notes(&self) -> &[NoteEntry] {
        &self.notes
    }

    pub fn timers(&self) -> &[TimerEntry] {
        self.timers.all()
    }

    pub fn next_due(&self) -> Option<DateTime<Local>> {
        self.timers.next_due()
    }

    pub fn history(&self) -> &[String] {
        self.calculator.history()
    }
}
