/// Encoding of the habit and completion collections into storage slots
///
/// Both collections are stored as JSON arrays, one slot each. A slot that
/// has never been written reads back as an empty collection.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{CompletionLog, CompletionRecord, Habit};
use crate::storage::{KeyValueStore, StorageError};

/// Slot holding the habit definitions
pub const HABITS_SLOT: &str = "habits";

/// Slot holding the completion records
pub const COMPLETIONS_SLOT: &str = "habit_completions";

/// Typed access to the two persisted collections
pub struct HabitRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HabitRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_habits(&self) -> Result<Vec<Habit>, StorageError> {
        self.read_slot(HABITS_SLOT)
    }

    pub fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        self.write_slot(HABITS_SLOT, habits)
    }

    pub fn load_completions(&self) -> Result<CompletionLog, StorageError> {
        let records: Vec<CompletionRecord> = self.read_slot(COMPLETIONS_SLOT)?;
        Ok(CompletionLog::from_records(records))
    }

    pub fn save_completions(&self, log: &CompletionLog) -> Result<(), StorageError> {
        self.write_slot(COMPLETIONS_SLOT, log.records())
    }

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>, StorageError> {
        match self.store.get(slot)? {
            Some(blob) => serde_json::from_str(&blob).map_err(|source| StorageError::Decode {
                slot: slot.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn write_slot<T: Serialize>(&self, slot: &str, items: &[T]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(items)?;
        self.store.set(slot, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HabitId;
    use crate::storage::MemoryStorage;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_empty_slots_read_as_empty() {
        let repo = HabitRepository::new(MemoryStorage::new());
        assert!(repo.load_habits().unwrap().is_empty());
        assert!(repo.load_completions().unwrap().is_empty());
    }

    #[test]
    fn test_reads_documents_written_by_older_clients() {
        let storage = MemoryStorage::new();
        storage
            .set(
                HABITS_SLOT,
                r#"[{"id":"1718029384123","name":"Stretch","order":0,"createdAt":"2024-06-10T14:23:04.123Z"}]"#,
            )
            .unwrap();
        storage
            .set(
                COMPLETIONS_SLOT,
                r#"[{"habitId":"1718029384123","date":"2024-06-10","completed":true}]"#,
            )
            .unwrap();

        let repo = HabitRepository::new(storage);
        let habits = repo.load_habits().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Stretch");
        assert_eq!(
            habits[0].created_at,
            Utc.with_ymd_and_hms(2024, 6, 10, 14, 23, 4).unwrap()
                + chrono::Duration::milliseconds(123)
        );

        let log = repo.load_completions().unwrap();
        let id = HabitId::parse("1718029384123").unwrap();
        assert!(log.is_completed(&id, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
    }

    #[test]
    fn test_save_then_load_keeps_every_field() {
        let repo = HabitRepository::new(MemoryStorage::new());
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 7, 0, 0).unwrap();
        let habit = Habit::new("Journal", 0, created_at).unwrap();

        let mut log = CompletionLog::new();
        log.toggle(&habit.id, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        repo.save_habits(std::slice::from_ref(&habit)).unwrap();
        repo.save_completions(&log).unwrap();

        assert_eq!(repo.load_habits().unwrap(), vec![habit]);
        assert_eq!(repo.load_completions().unwrap(), log);
    }

    #[test]
    fn test_garbage_slot_is_a_decode_error() {
        let storage = MemoryStorage::new();
        storage.set(COMPLETIONS_SLOT, "not json").unwrap();

        let repo = HabitRepository::new(storage);
        match repo.load_completions() {
            Err(StorageError::Decode { slot, .. }) => assert_eq!(slot, COMPLETIONS_SLOT),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
