//! Offline scripted voice assistant core.
//!
//! Text goes in, a response string comes out. Commands are classified by
//! keyword predicates (first match wins) and answered from canned pools,
//! the clock, a left-to-right arithmetic evaluator, one-shot timers or a
//! persisted note list.

pub mod assistant;
pub mod calc;
pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod jarvis;
pub mod notes;
pub mod responses;
pub mod store;
pub mod timer;
pub mod types;

pub use assistant::Assistant;
pub use classify::classify;
pub use error::{AssistantError, StoreError};
pub use jarvis::Jarvis;
pub use types::{Calculation, Category, NoteEntry, TimerEntry};
