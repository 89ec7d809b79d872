use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification label for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greeting,
    Time,
    Date,
    Joke,
    Calculation,
    Timer,
    Note,
    Weather,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Time => "time",
            Category::Date => "date",
            Category::Joke => "joke",
            Category::Calculation => "calculation",
            Category::Timer => "timer",
            Category::Note => "note",
            Category::Weather => "weather",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note captured from a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub content: String,
    pub timestamp: String,
}

/// Result of a successful arithmetic evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub value: f64,
    pub trace: String,
}

/// Canonical timer unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    /// Map spoken unit text to a unit. Anything unrecognized counts as minutes.
    pub fn from_text(text: &str) -> Self {
        match text.trim_end_matches('s') {
            "second" | "sec" => TimeUnit::Second,
            "hour" | "hr" => TimeUnit::Hour,
            _ => TimeUnit::Minute,
        }
    }

    pub fn millis(&self) -> u64 {
        match self {
            TimeUnit::Second => 1_000,
            TimeUnit::Minute => 60_000,
            TimeUnit::Hour => 3_600_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Scheduled,
    Fired,
}

/// A one-shot timer
#[derive(Debug, Clone)]
pub struct TimerEntry {
    pub id: u64,
    pub amount: u64,
    pub unit: TimeUnit,
    /// Unit as the user said it, e.g. "minutes"
    pub unit_text: String,
    pub duration_ms: u64,
    pub created_at: DateTime<Local>,
    pub due_at: DateTime<Local>,
    pub state: TimerState,
}

impl TimerEntry {
    pub fn is_due(&self, now: DateTime<Local>) -> bool {
        self.state == TimerState::Scheduled && now >= self.due_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_text() {
        assert_eq!(TimeUnit::from_text("minutes"), TimeUnit::Minute);
        assert_eq!(TimeUnit::from_text("secs"), TimeUnit::Second);
        assert_eq!(TimeUnit::from_text("hr"), TimeUnit::Hour);
    }

    #[test]
    fn test_unknown_unit_is_minutes() {
        assert_eq!(TimeUnit::from_text("fortnight"), TimeUnit::Minute);
        assert_eq!(TimeUnit::from_text(""), TimeUnit::Minute);
    }
}
