//! The Jarvis persona: wake word plus a handful of canned answers. No timers,
//! notes or arithmetic.

use crate::classify::{classify_jarvis, normalize};
use crate::format::{format_short_date, format_time};
use crate::responses::ResponseSelector;
use crate::timer::{Clock, SystemClock};
use crate::types::Category;
use tracing::debug;

pub const DEFAULT_WAKE_WORD: &str = "jarvis";

const WAKE: &[&str] = &[
    "Yes, I'm listening?",
    "At your service.",
    "How can I assist you?",
    "I'm here, what do you need?",
];

const GREETINGS: &[&str] = &[
    "Hello sir, how can I assist you today?",
    "Good to hear from you. What can I do for you?",
    "At your service. What do you need?",
];

const WEATHER: &[&str] = &[
    "I'm unable to access weather data in this demo version.",
    "Weather information requires an API connection.",
];

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the scarecrow win an award? He was outstanding in his field!",
    "I told my computer I needed a break, and it said '404 - Break not found'",
];

const DEFAULT: &[&str] = &[
    "I'm not sure how to help with that yet.",
    "That command isn't in my current programming.",
    "I'll need further instructions for that task.",
];

// `{}` is replaced with the formatted time or date
const TIME_TEMPLATES: &[&str] = &["The current time is {}", "It's {}"];
const DATE_TEMPLATES: &[&str] = &["Today is {}", "The date is {}"];

pub struct Jarvis {
    wake_word: String,
    selector: ResponseSelector,
    clock: Box<dyn Clock>,
}

impl Default for Jarvis {
    fn default() -> Self {
        Self::new()
    }
}

impl Jarvis {
    pub fn new() -> Self {
        Self {
            wake_word: DEFAULT_WAKE_WORD.to_string(),
            selector: ResponseSelector::new(),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_selector(mut self, selector: ResponseSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn wake_word(&self) -> &str {
        &self.wake_word
    }

    pub fn set_wake_word(&mut self, word: &str) {
        self.wake_word = normalize(word);
    }

    pub fn process_command(&mut self, text: &str) -> String {
        let command = normalize(text);

        if !self.wake_word.is_empty() && command.contains(&self.wake_word) {
            debug!(wake_word = %self.wake_word, "wake word heard");
            return self.pick(WAKE);
        }

        let category = classify_jarvis(&command);
        debug!(%category, command = %command, "classified command");

        match category {
            Category::Greeting => self.pick(GREETINGS),
            Category::Time => {
                let now = format_time(&self.clock.now());
                self.pick(TIME_TEMPLATES).replace("{}", &now)
            }
            Category::Date => {
                let today = format_short_date(&self.clock.now());
                self.pick(DATE_TEMPLATES).replace("{}", &today)
            }
            Category::Weather => self.pick(WEATHER),
            Category::Joke => self.pick(JOKES),
            _ => self.pick(DEFAULT),
        }
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        self.selector.pick(pool).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;
    use chrono::{Local, TimeZone};

    fn jarvis() -> Jarvis {
        let clock = ManualClock::new(Local.with_ymd_and_hms(2024, 1, 5, 14, 5, 9).unwrap());
        Jarvis::new()
            .with_clock(Box::new(clock))
            .with_selector(ResponseSelector::with_seed(5))
    }

    #[test]
    fn test_wake_word_wins() {
        let mut j = jarvis();
        for cmd in ["Jarvis", "hello jarvis what time is it", "jarvis tell me a joke"] {
            assert!(WAKE.contains(&j.process_command(cmd).as_str()), "{}", cmd);
        }
    }

    #[test]
    fn test_custom_wake_word() {
        let mut j = jarvis();
        j.set_wake_word("  Friday ");
        assert_eq!(j.wake_word(), "friday");
        assert!(WAKE.contains(&j.process_command("hey friday").as_str()));
        assert!(!WAKE.contains(&j.process_command("jarvis, weather?").as_str()));
    }

    #[test]
    fn test_time_and_date_templates() {
        let mut j = jarvis();
        let time = j.process_command("what time is it");
        assert!(
            time == "The current time is 2:05:09 PM" || time == "It's 2:05:09 PM",
            "{}",
            time
        );

        let date = j.process_command("what's the date");
        assert!(
            date == "Today is 1/5/2024" || date == "The date is 1/5/2024",
            "{}",
            date
        );
    }

    #[test]
    fn test_canned_categories() {
        let mut j = jarvis();
        assert!(GREETINGS.contains(&j.process_command("hello").as_str()));
        assert!(WEATHER.contains(&j.process_command("weather").as_str()));
        assert!(JOKES.contains(&j.process_command("a joke").as_str()));
        assert!(DEFAULT.contains(&j.process_command("open the pod bay doors").as_str()));
    }
}
