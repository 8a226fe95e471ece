/// Analytics engine for the habit overview screen
///
/// Everything here is derived on demand from the habit list, the completion
/// log and a pinned "today"; nothing is stored.

pub mod calendar;

pub use calendar::*;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::{habit_streak, CompletionLog, DomainError, Habit};

/// Length of the trailing window used for consistency, today included
pub const CONSISTENCY_WINDOW_DAYS: u32 = 30;

/// Headline numbers shown at the top of the analytics screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewStats {
    /// Share of habits completed today, 0-100
    pub today_completion_percentage: f64,
    /// Mean current streak across habits, in days
    pub average_streak: f64,
    /// Mean daily completion share over the last 30 days, 0-100
    pub consistency_percentage: f64,
}

impl OverviewStats {
    /// Today's percentage rounded for display
    pub fn today_display(&self) -> u32 {
        self.today_completion_percentage.round() as u32
    }

    /// Average streak rounded to whole days
    pub fn average_streak_display(&self) -> u32 {
        self.average_streak.round() as u32
    }

    /// Consistency rounded for display
    pub fn consistency_display(&self) -> u32 {
        self.consistency_percentage.round() as u32
    }
}

/// Stateless aggregation over a snapshot of habits and completions
pub struct AnalyticsEngine<'a> {
    habits: &'a [Habit],
    log: &'a CompletionLog,
    today: NaiveDate,
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(habits: &'a [Habit], log: &'a CompletionLog, today: NaiveDate) -> Self {
        Self { habits, log, today }
    }

    /// The day every "today"-relative figure is computed for
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Fraction (0.0-1.0) of habits completed on `date`; 0 with no habits
    pub fn day_completion_fraction(&self, date: NaiveDate) -> f64 {
        if self.habits.is_empty() {
            return 0.0;
        }

        let completed = self
            .habits
            .iter()
            .filter(|h| self.log.is_completed(&h.id, date))
            .count();

        completed as f64 / self.habits.len() as f64
    }

    pub fn today_completion_percentage(&self) -> f64 {
        self.day_completion_fraction(self.today) * 100.0
    }

    /// Mean current streak over all habits; 0 with no habits
    pub fn average_streak(&self) -> f64 {
        if self.habits.is_empty() {
            return 0.0;
        }

        let total: u32 = self
            .habits
            .iter()
            .map(|h| habit_streak(self.log, &h.id, self.today))
            .sum();

        total as f64 / self.habits.len() as f64
    }

    /// Average of the per-day fractions for today and the 29 days before
    pub fn consistency_percentage(&self) -> f64 {
        let total: f64 = (0..CONSISTENCY_WINDOW_DAYS)
            .map(|offset| self.today - Duration::days(offset as i64))
            .map(|date| self.day_completion_fraction(date))
            .sum();

        total / CONSISTENCY_WINDOW_DAYS as f64 * 100.0
    }

    pub fn overview(&self) -> OverviewStats {
        OverviewStats {
            today_completion_percentage: self.today_completion_percentage(),
            average_streak: self.average_streak(),
            consistency_percentage: self.consistency_percentage(),
        }
    }

    /// Per-day completion for every day of a month
    pub fn month_heatmap(&self, year: i32, month: u32) -> Result<MonthHeatmap, DomainError> {
        MonthHeatmap::build(year, month, self.today, |date| self.day_completion_fraction(date))
    }
}
