/// Storage layer for persisting habit data
///
/// Persistence is a plain key-value store with named slots. Each slot holds
/// one serialized collection and is always replaced as a whole. The
/// [`HabitRepository`] knows which slots exist and how to encode them.

pub mod sqlite;
pub mod memory;
pub mod migrations;
pub mod repository;

// Re-export the main storage types
pub use sqlite::*;
pub use memory::*;
pub use repository::*;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored data in slot '{slot}' is unreadable: {source}")]
    Decode {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the key-value interface the habit store persists through
///
/// Implementations must make `set` all-or-nothing from the caller's point of
/// view: after an error the previous value is still what `get` returns.
pub trait KeyValueStore {
    /// Read a slot, or `None` if it has never been written
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace the entire contents of a slot
    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).get(slot)
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(slot, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).get(slot)
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(slot, value)
    }
}
