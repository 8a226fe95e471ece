/// Monthly calendar heat-map
///
/// One cell per day of the month holding the share of habits completed that
/// day. The band is a coarse bucket of that share for coloring.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::{days_in_month, DomainError};

/// Coarse completion level for a calendar cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionBand {
    /// Nothing done
    None,
    /// Up to half done
    Partial,
    /// More than half, but not all
    Most,
    /// Everything done
    Complete,
}

impl CompletionBand {
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= 1.0 {
            CompletionBand::Complete
        } else if fraction > 0.5 {
            CompletionBand::Most
        } else if fraction > 0.0 {
            CompletionBand::Partial
        } else {
            CompletionBand::None
        }
    }

    /// Single-character glyph for text rendering
    pub fn glyph(&self) -> char {
        match self {
            CompletionBand::None => '·',
            CompletionBand::Partial => '░',
            CompletionBand::Most => '▒',
            CompletionBand::Complete => '█',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Share of habits completed that day, 0.0-1.0
    pub fraction: f64,
    pub band: CompletionBand,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthHeatmap {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st in a Sunday-first week grid
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthHeatmap {
    /// Build the heat-map using `fraction_for` to score each day
    pub fn build<F>(year: i32, month: u32, today: NaiveDate, fraction_for: F) -> Result<Self, DomainError>
    where
        F: Fn(NaiveDate) -> f64,
    {
        let day_count = days_in_month(year, month)?;
        let mut days = Vec::with_capacity(day_count as usize);
        let mut leading_blanks = 0;

        for day in 1..=day_count {
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                DomainError::InvalidDate(format!("No such day: {}-{:02}-{:02}", year, month, day))
            })?;
            if day == 1 {
                leading_blanks = date.weekday().num_days_from_sunday();
            }

            let fraction = fraction_for(date);
            days.push(DayCell {
                date,
                fraction,
                band: CompletionBand::from_fraction(fraction),
                is_today: date == today,
            });
        }

        Ok(Self {
            year,
            month,
            leading_blanks,
            days,
        })
    }

    /// Rows of a Sunday-first calendar grid; `None` marks padding cells
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let mut cells: Vec<Option<&DayCell>> = (0..self.leading_blanks).map(|_| None).collect();
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells.chunks(7).map(|week| week.to_vec()).collect()
    }
}
