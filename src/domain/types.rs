/// Core identifier and date helpers used throughout the domain layer
///
/// Habits are keyed by an opaque string id, and completion records are keyed
/// by a local calendar day rendered as `YYYY-MM-DD`.

use std::fmt;

use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::domain::DomainError;

/// Format used for calendar days in storage and on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for a habit
///
/// Ids are opaque: new habits get a random UUID, but any non-empty string
/// loaded from storage is accepted (older data used timestamp tokens).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    /// Generate a new random habit ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id string, rejecting blank input
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitId(
                "Habit ID cannot be empty".to_string()
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First few characters, for compact display
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a `YYYY-MM-DD` calendar day
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(format!("Expected YYYY-MM-DD, got '{}'", s)))
}

/// Parse a `YYYY-MM` month into (year, month)
pub fn parse_month(s: &str) -> Result<(i32, u32), DomainError> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(format!("Expected YYYY-MM, got '{}'", s)))?;
    Ok((first.year(), first.month()))
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DomainError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::InvalidDate(format!("No such month: {}-{:02}", year, month)))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| DomainError::InvalidDate(format!("Month out of range: {}-{:02}", year, month)))?;

    Ok((next - first).num_days() as u32)
}
