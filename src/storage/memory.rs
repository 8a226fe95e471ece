/// In-memory key-value storage
///
/// Useful for tests and for embedding the store without a database file.
/// Clones share the same underlying slots, which lets a test "reopen" a
/// store and check what was persisted.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
struct Slots {
    values: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

/// Key-value slots held in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<Slots>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail, simulating an unavailable backend
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }

    /// Raw contents of a slot
    pub fn raw(&self, slot: &str) -> Option<String> {
        self.inner.values.borrow().get(slot).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(slot))
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        if self.inner.fail_writes.get() {
            return Err(StorageError::Unavailable(format!(
                "write to slot '{}' rejected",
                slot
            )));
        }

        self.inner
            .values
            .borrow_mut()
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
