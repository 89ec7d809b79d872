use crate::types::Category;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const GREETINGS: &[&str] = &[
    "Hello! I'm NOVA, your offline AI assistant. How can I help you today?",
    "Hi there! I'm running completely offline and ready to assist you.",
    "Greetings! All my processing happens locally on your device - no internet required!",
    "Hello! I'm here to help you without needing any internet connection.",
];

pub const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the scarecrow win an award? He was outstanding in his field!",
    "I told my computer I needed a break, and it said '404 - Break not found'!",
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "What do you call a fake noodle? An impasta!",
    "Why did the JavaScript developer wear glasses? Because he couldn't C#!",
    "I'm reading a book about anti-gravity. It's impossible to put down!",
    "Why don't skeletons fight each other? They don't have the guts!",
];

pub const WEATHER: &[&str] = &[
    "I'm currently operating in offline mode, so I can't access real-time weather data. However, you can check your device's built-in weather app or look outside your window!",
];

pub const DEFAULT: &[&str] = &[
    "I'm not sure I understand. Could you try rephrasing that?",
    "That's an interesting request. I'm still learning offline commands!",
    "I don't have a specific response for that yet. Try asking about time, date, calculations, or jokes!",
    "As an offline assistant, my capabilities are limited to local processing. Try a different command!",
];

/// Fixed pool for the categories answered purely from canned text
pub fn pool_for(category: Category) -> Option<&'static [&'static str]> {
    match category {
        Category::Greeting => Some(GREETINGS),
        Category::Joke => Some(JOKES),
        Category::Weather => Some(WEATHER),
        Category::Unknown => Some(DEFAULT),
        _ => None,
    }
}

/// Uniform random choice over response pools
pub struct ResponseSelector {
    rng: StdRng,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence of picks for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Independent draw with replacement. None only for an empty pool.
    pub fn pick<'a>(&mut self, pool: &[&'a str]) -> Option<&'a str> {
        pool.choose(&mut self.rng).copied()
    }
}
