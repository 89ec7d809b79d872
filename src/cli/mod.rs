pub mod ask;
pub mod config;
pub mod notes;

use chrono::{DateTime, Local};
use nova::config::{NovaConfig, Persona};
use nova::responses::ResponseSelector;
use nova::store::SqliteNoteStore;
use nova::timer::{completion_message, LogNotifier, Notifier};
use nova::{Assistant, Jarvis};
use std::fs;

/// Logs completions and prints them on the terminal
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn timer_complete(&self, amount: u64, unit: &str) {
        LogNotifier.timer_complete(amount, unit);
        println!("{}", completion_message(amount, unit));
    }
}

fn selector(config: &NovaConfig) -> ResponseSelector {
    match config.seed() {
        Some(seed) => ResponseSelector::with_seed(seed),
        None => ResponseSelector::new(),
    }
}

/// Open the Nova assistant on the configured note database
pub fn open_assistant(config: &NovaConfig) -> Result<Assistant, String> {
    let data_dir = config.data_dir();
    fs::create_dir_all(&data_dir)
        .map_err(|e| format!("Failed to create {}: {}", data_dir.display(), e))?;

    let store = SqliteNoteStore::open(&config.db_path())
        .map_err(|e| format!("Failed to open note store: {}", e))?;

    Ok(Assistant::new(Box::new(store))
        .with_selector(selector(config))
        .with_notifier(Box::new(TerminalNotifier)))
}

fn open_jarvis(config: &NovaConfig) -> Jarvis {
    let mut jarvis = Jarvis::new().with_selector(selector(config));
    jarvis.set_wake_word(&config.wake_word());
    jarvis
}

/// Whichever persona is answering this session
pub enum Session {
    Nova(Assistant),
    Jarvis(Jarvis),
}

impl Session {
    pub fn open(config: &NovaConfig, persona: Option<Persona>) -> Result<Self, String> {
        match persona.unwrap_or_else(|| config.persona()) {
            Persona::Nova => Ok(Session::Nova(open_assistant(config)?)),
            Persona::Jarvis => Ok(Session::Jarvis(open_jarvis(config))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Session::Nova(_) => Persona::Nova.as_str(),
            Session::Jarvis(_) => Persona::Jarvis.as_str(),
        }
    }

    pub fn respond(&mut self, text: &str) -> String {
        match self {
            Session::Nova(a) => a.process_command(text),
            Session::Jarvis(j) => j.process_command(text),
        }
    }

    /// Earliest pending timer; Jarvis has none
    pub fn next_due(&self) -> Option<DateTime<Local>> {
        match self {
            Session::Nova(a) => a.next_due(),
            Session::Jarvis(_) => None,
        }
    }

    /// Fire due timers
    pub fn tick(&mut self) -> usize {
        match self {
            Session::Nova(a) => a.tick(),
            Session::Jarvis(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use nova::notes::MemoryNoteStore;
    use nova::timer::{Clock, ManualClock};

    #[test]
    fn test_session_reports_pending_timers() {
        let clock = ManualClock::new(Local::now());
        let assistant = Assistant::new(Box::new(MemoryNoteStore::new()))
            .with_clock(Box::new(clock.clone()))
            .with_notifier(Box::new(TerminalNotifier));
        let mut session = Session::Nova(assistant);

        session.respond("set a timer for 2 seconds");
        assert_eq!(session.next_due(), Some(clock.now() + Duration::seconds(2)));

        clock.advance(Duration::seconds(2));
        assert_eq!(session.tick(), 1);
        assert!(session.next_due().is_none());
    }

    #[test]
    fn test_jarvis_session_has_no_timers() {
        let mut session = Session::Jarvis(Jarvis::new());
        assert!(session.next_due().is_none());
        assert_eq!(session.tick(), 0);
    }
}
