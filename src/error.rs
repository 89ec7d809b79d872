use thiserror::Error;

/// Recoverable command failures. The display text is what the user hears.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("I need at least two numbers to perform a calculation. Try something like 'calculate 15 plus 7'.")]
    InputTooSparse,

    #[error("I can't divide by zero!")]
    DivisionByZero,

    #[error("Please specify a time duration. For example: 'set timer for 5 minutes'")]
    MissingDuration,

    #[error("What would you like me to remember?")]
    EmptyNoteContent,
}

/// Failures of the note store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("malformed note data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
