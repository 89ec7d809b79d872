use crate::error::StoreError;
use crate::notes::{NoteStore, NOTES_KEY};
use rusqlite::{params, Connection, OptionalExtension, Result};
use std::path::Path;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// String slots backed by SQLite
pub struct SlotStore {
    conn: Connection,
}

impl SlotStore {
    /// Open or create the slot database
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
    }

    /// Insert or overwrite a slot
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    /// Remove a slot, returns whether it existed
    pub fn remove(&self, key: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM slots WHERE key = ?1", params![key])?;
        Ok(count > 0)
    }
}

/// Note store living in the `nova-notes` slot of a [`SlotStore`]
pub struct SqliteNoteStore {
    slots: SlotStore,
}

impl SqliteNoteStore {
    pub fn open(db_path: &Path) -> std::result::Result<Self, StoreError> {
        Ok(Self {
            slots: SlotStore::open(db_path)?,
        })
    }

    pub fn in_memory() -> std::result::Result<Self, StoreError> {
        Ok(Self {
            slots: SlotStore::in_memory()?,
        })
    }
}

impl NoteStore for SqliteNoteStore {
    fn load(&self) -> std::result::Result<Option<String>, StoreError> {
        Ok(self.slots.get(NOTES_KEY)?)
    }

    fn save(&mut self, value: &str) -> std::result::Result<(), StoreError> {
        Ok(self.slots.set(NOTES_KEY, value)?)
    }

    fn clear(&mut self) -> std::result::Result<(), StoreError> {
        self.slots.remove(NOTES_KEY)?;
        Ok(())
    }
}
