/// Habit entity and related functionality
///
/// This module defines the Habit struct that represents a daily habit the
/// user wants to track, along with name validation and the ordering rules
/// for the habit list.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{HabitId, DomainError};

/// A habit represents something the user wants to do every day
///
/// The serialized form uses camelCase keys so stored documents look like
/// `{"id": "...", "name": "...", "order": 0, "createdAt": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Zero-based display position, dense across the collection
    pub order: u32,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The name is trimmed before it is stored. A fresh id is generated.
    pub fn new(name: &str, order: u32, created_at: DateTime<Utc>) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        Ok(Self {
            id: HabitId::generate(),
            name,
            order,
            created_at,
        })
    }

    /// Create a habit from existing data (used when loading from storage)
    pub fn from_existing(
        id: HabitId,
        name: String,
        order: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            order,
            created_at,
        }
    }

    /// Validate a habit name and return its trimmed form
    pub fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        Ok(trimmed.to_string())
    }
}

/// Sort habits ascending by their display order
pub fn sort_by_order(habits: &mut [Habit]) {
    habits.sort_by_key(|h| h.order);
}

/// Reassign order so it matches each habit's position (0..n-1)
pub fn renumber(habits: &mut [Habit]) {
    for (index, habit) in habits.iter_mut().enumerate() {
        habit.order = index as u32;
    }
}

/// Move the habit at `from` to position `to`, then renumber
///
/// Both indices must address an existing position; otherwise the list is
/// left untouched and an error is returned.
pub fn move_habit(habits: &mut Vec<Habit>, from: usize, to: usize) -> Result<(), DomainError> {
    let len = habits.len();
    if from >= len || to >= len {
        return Err(DomainError::ReorderOutOfRange { from, to, len });
    }

    let moved = habits.remove(from);
    habits.insert(to, moved);
    renumber(habits);
    Ok(())
}
