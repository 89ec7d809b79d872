use crate::types::Category;

const GREETING_TERMS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

const CALCULATION_TERMS: &[&str] = &[
    "calculate",
    "compute",
    "what is",
    "how much is",
    "+",
    "-",
    "*",
    "/",
    "plus",
    "minus",
    "times",
    "divided",
];

/// Lower-case and trim raw input
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn contains_any(command: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| command.contains(term))
}

pub fn is_greeting(command: &str) -> bool {
    contains_any(command, GREETING_TERMS)
}

/// "timer" also contains "time", so timer requests are excluded here.
pub fn is_time_query(command: &str) -> bool {
    command.contains("time") && !command.contains("timer")
}

pub fn is_date_query(command: &str) -> bool {
    contains_any(command, &["date", "today", "day"])
}

pub fn is_joke_request(command: &str) -> bool {
    contains_any(command, &["joke", "funny"])
}

pub fn is_calculation(command: &str) -> bool {
    contains_any(command, CALCULATION_TERMS)
}

pub fn is_timer_request(command: &str) -> bool {
    contains_any(command, &["timer", "alarm", "remind"])
}

pub fn is_note_request(command: &str) -> bool {
    contains_any(command, &["note", "remember", "write down"])
}

pub fn is_weather_query(command: &str) -> bool {
    contains_any(command, &["weather", "temperature", "forecast"])
}

/// Ordered predicates, first match wins. The order matters because the
/// keyword sets overlap.
const PREDICATES: &[(fn(&str) -> bool, Category)] = &[
    (is_greeting, Category::Greeting),
    (is_time_query, Category::Time),
    (is_date_query, Category::Date),
    (is_joke_request, Category::Joke),
    (is_calculation, Category::Calculation),
    (is_timer_request, Category::Timer),
    (is_note_request, Category::Note),
    (is_weather_query, Category::Weather),
];

/// Classify an already normalized command
pub fn classify(command: &str) -> Category {
    PREDICATES
        .iter()
        .find(|(matches, _)| matches(command))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Unknown)
}

/// Classifier used by the Jarvis persona. Smaller vocabulary, different order.
pub fn classify_jarvis(command: &str) -> Category {
    if command.contains("hello") || command.contains("hi") {
        Category::Greeting
    } else if command.contains("time") {
        Category::Time
    } else if command.contains("date") {
        Category::Date
    } else if command.contains("weather") {
        Category::Weather
    } else if command.contains("joke") {
        Category::Joke
    } else {
        Category::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_wins_over_time() {
        for cmd in [
            "set a timer for the time being",
            "what time does my timer end",
            "timer time",
        ] {
            assert_eq!(classify(cmd), Category::Timer, "{}", cmd);
        }
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(classify("hello there"), Category::Greeting);
        assert_eq!(classify("what time is it"), Category::Time);
        assert_eq!(classify("what is the date"), Category::Date);
        assert_eq!(classify("tell me a joke"), Category::Joke);
        assert_eq!(classify("calculate 15 plus 7"), Category::Calculation);
        assert_eq!(classify("set an alarm for 5 min"), Category::Timer);
        assert_eq!(classify("please remember buy milk"), Category::Note);
        assert_eq!(classify("weather forecast"), Category::Weather);
        assert_eq!(classify("open the pod bay doors"), Category::Unknown);
    }

    #[test]
    fn test_overlapping_keywords() {
        // "what is" is a calculation term but "day" is checked first
        assert_eq!(classify("what is the day"), Category::Date);
        // "this" contains "hi"
        assert_eq!(classify("calculate this"), Category::Greeting);
        // "-" makes it a calculation before the note predicate runs
        assert_eq!(classify("note: buy milk - two"), Category::Calculation);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let cmd = "what is 3 times 4";
        let first = classify(cmd);
        for _ in 0..10 {
            assert_eq!(classify(cmd), first);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello NOVA "), "hello nova");
    }

    #[test]
    fn test_classify_jarvis() {
        assert_eq!(classify_jarvis("hi"), Category::Greeting);
        assert_eq!(classify_jarvis("what time is it"), Category::Time);
        assert_eq!(classify_jarvis("the date"), Category::Date);
        assert_eq!(classify_jarvis("weather report"), Category::Weather);
        assert_eq!(classify_jarvis("joke please"), Category::Joke);
        assert_eq!(classify_jarvis("calculate 2 plus 2"), Category::Unknown);
    }
}
