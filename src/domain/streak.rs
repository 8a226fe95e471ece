/// Streak calculation
///
/// A streak is the number of consecutive days, ending with "today", on which
/// a habit was completed. There is no grace day: if today is not done, the
/// streak is zero no matter what came before.

use std::collections::HashSet;

use chrono::NaiveDate;
use crate::domain::{CompletionLog, HabitId};

/// Count consecutive completed days walking back from `today`
pub fn current_streak(completed: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut checking_date = Some(today);

    // Each step consumes a distinct date from the set, so this terminates
    while let Some(date) = checking_date {
        if !completed.contains(&date) {
            break;
        }
        streak += 1;
        checking_date = date.pred_opt();
    }

    streak
}

/// Current streak for a habit according to the completion log
pub fn habit_streak(log: &CompletionLog, habit_id: &HabitId, today: NaiveDate) -> u32 {
    let completed = log.completed_dates(habit_id);
    if completed.is_empty() {
        return 0;
    }
    current_streak(&completed, today)
}
