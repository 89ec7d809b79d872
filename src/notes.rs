use crate::error::{AssistantError, StoreError};
use crate::types::NoteEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Key of the slot holding the serialized note list
pub const NOTES_KEY: &str = "nova-notes";

// Surrounding whitespace goes with the trigger so the gap it leaves is one space
static TRIGGER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*(?:take a note|write down|remember|note)\s*").expect("valid trigger pattern")
});

static POLITE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:please|can you|could you|would you|i need to|i want you to)\b[\s,]*")
        .expect("valid prefix pattern")
});

/// Persistence for the note list: one slot, rewritten in full
pub trait NoteStore {
    /// Raw slot contents, None when the slot is absent
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&mut self, value: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Slot kept in process memory
#[derive(Debug, Default, Clone)]
pub struct MemoryNoteStore {
    slot: Option<String>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-filled slot
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Some(value.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl NoteStore for MemoryNoteStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        self.slot = Some(value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}

/// Read notes from the store. Missing, unreadable or malformed data yields
/// an empty list.
pub fn load_notes(store: &dyn NoteStore) -> Vec<NoteEntry> {
    let raw = match store.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "failed to read notes, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<NoteEntry>>(&raw) {
        Ok(notes) => notes,
        Err(e) => {
            warn!(error = %e, "stored notes are malformed, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite the slot with the full note list
pub fn save_notes(store: &mut dyn NoteStore, notes: &[NoteEntry]) -> Result<(), StoreError> {
    let json = serde_json::to_string(notes)?;
    store.save(&json)
}

/// Pull the note body out of a command.
///
/// Every trigger phrase is removed wherever it sits and the rest of the text
/// is kept as typed. Leading politeness ("please", "can you", ...) left in
/// front is dropped.
pub fn extract_note_content(command: &str) -> Result<String, AssistantError> {
    let stripped = TRIGGER_RE.replace_all(command, " ");
    let mut content = stripped.trim();

    while let Some(m) = POLITE_PREFIX_RE.find(content) {
        content = content[m.end()..].trim_start();
    }

    if content.is_empty() {
        Err(AssistantError::EmptyNoteContent)
    } else {
        Ok(content.to_string())
    }
}
