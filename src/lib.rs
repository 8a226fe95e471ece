/// Public library interface for the daily streak habit tracker
///
/// This module exports the habit store, its persistence adapters and the
/// analytics queries used by the command-line front end.

use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
mod clock;
mod store;
mod view;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    HabitRepository, KeyValueStore, MemoryStorage, SqliteStorage, StorageError,
    COMPLETIONS_SLOT, HABITS_SLOT,
};
pub use analytics::{
    AnalyticsEngine, CompletionBand, DayCell, MonthHeatmap, OverviewStats,
    CONSISTENCY_WINDOW_DAYS,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::HabitStore;
pub use view::{render_analytics, render_daily, View};

/// Errors returned by habit store operations
///
/// Validation failures are reported before anything is mutated; storage
/// failures mean the write did not happen and in-memory state is unchanged.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
}

impl TrackerError {
    /// Whether the caller can fix this by changing its input
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Domain(_))
    }
}
