/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, CompletionRecord) and the
/// streak rules. These types represent the fundamental concepts in our
/// habit tracking system.

pub mod habit;
pub mod completion;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use completion::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors raised when input fails validation, before any state is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid habit id: {0}")]
    InvalidHabitId(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Cannot move habit from position {from} to {to}: list has {len} habits")]
    ReorderOutOfRange { from: usize, to: usize, len: usize },
}
