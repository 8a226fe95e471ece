/// Completion records for tracking which habits were done on which day
///
/// A record is keyed by (habit id, calendar day). The log keeps records in
/// their stored order so that a round trip through storage is lossless.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::HabitId;

/// A per-day marker of whether a habit was done
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    /// Which habit this record is for
    pub habit_id: HabitId,
    /// Local calendar day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Whether the habit counts as done for that day
    pub completed: bool,
}

impl CompletionRecord {
    /// A freshly created record always starts out completed
    pub fn new(habit_id: HabitId, date: NaiveDate) -> Self {
        Self {
            habit_id,
            date,
            completed: true,
        }
    }

    fn matches(&self, habit_id: &HabitId, date: NaiveDate) -> bool {
        self.date == date && &self.habit_id == habit_id
    }
}

/// The full collection of completion records
///
/// Holds at most one record per (habit, day) for anything it creates itself.
/// If loaded data already contains duplicates, the first one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLog {
    records: Vec<CompletionRecord>,
}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from records loaded from storage
    pub fn from_records(records: Vec<CompletionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for a (habit, day) pair
    pub fn find(&self, habit_id: &HabitId, date: NaiveDate) -> Option<&CompletionRecord> {
        self.records.iter().find(|r| r.matches(habit_id, date))
    }

    /// Flip the record for (habit, day), creating it as completed if absent
    ///
    /// Returns the completed state after the toggle.
    pub fn toggle(&mut self, habit_id: &HabitId, date: NaiveDate) -> bool {
        match self.records.iter_mut().find(|r| r.matches(habit_id, date)) {
            Some(record) => {
                record.completed = !record.completed;
                record.completed
            }
            None => {
                self.records.push(CompletionRecord::new(habit_id.clone(), date));
                true
            }
        }
    }

    /// Whether the habit is marked done on the given day
    pub fn is_completed(&self, habit_id: &HabitId, date: NaiveDate) -> bool {
        self.find(habit_id, date).map(|r| r.completed).unwrap_or(false)
    }

    /// Every day on which the habit is marked done
    pub fn completed_dates(&self, habit_id: &HabitId) -> HashSet<NaiveDate> {
        let mut seen = HashSet::new();
        let mut dates = HashSet::new();
        for record in self.records.iter().filter(|r| &r.habit_id == habit_id) {
            // Only the first record for a day counts
            if seen.insert(record.date) && record.completed {
                dates.insert(record.date);
            }
        }
        dates
    }

    /// Number of records shadowed by an earlier record with the same key
    pub fn duplicate_count(&self) -> usize {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| !seen.insert((&r.habit_id, r.date)))
            .count()
    }
}
