/// Text rendering of the two screens: today's checklist and analytics
///
/// Navigation is a plain two-state switch, there is no history stack.

use std::fmt::Write;

use chrono::Datelike;

use crate::clock::Clock;
use crate::storage::KeyValueStore;
use crate::store::HabitStore;
use crate::TrackerError;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Daily,
    Analytics,
}

impl View {
    /// The other screen
    pub fn toggle(self) -> Self {
        match self {
            View::Daily => View::Analytics,
            View::Analytics => View::Daily,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Daily => "Today",
            View::Analytics => "Analytics",
        }
    }
}

/// Today's habits with check marks and current streaks
pub fn render_daily<S: KeyValueStore, C: Clock>(store: &HabitStore<S, C>) -> String {
    let today = store.today();
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", View::Daily.title(), today.format("%A, %B %-d"));

    let checklist = store.today_checklist();
    if checklist.is_empty() {
        out.push_str("\nNo habits yet. Add one with `daily-streak add <name>`.\n");
        return out;
    }

    out.push('\n');
    for (position, (habit, done)) in checklist.iter().enumerate() {
        let mark = if *done { "[x]" } else { "[ ]" };
        let streak = store.streak_count_on(&habit.id, today);
        let _ = write!(out, "{:>2}. {} {}", position + 1, mark, habit.name);
        if streak > 0 {
            let _ = write!(out, "  ({} day{})", streak, if streak == 1 { "" } else { "s" });
        }
        let _ = writeln!(out, "  #{}", habit.id.short());
    }

    let done = checklist.iter().filter(|(_, done)| *done).count();
    let _ = writeln!(out, "\n{} of {} done today", done, checklist.len());
    out
}

/// Overview stats, the heat-map for a month (defaults to the current one)
/// and each habit's current streak
pub fn render_analytics<S: KeyValueStore, C: Clock>(
    store: &HabitStore<S, C>,
    month: Option<(i32, u32)>,
) -> Result<String, TrackerError> {
    let engine = store.analytics();
    let today = engine.today();
    let (year, month) = month.unwrap_or((today.year(), today.month()));
    let heatmap = engine.month_heatmap(year, month)?;
    let stats = engine.overview();

    let mut out = String::new();
    let _ = writeln!(out, "{}\n", View::Analytics.title());
    let _ = writeln!(out, "Today:       {}%", stats.today_display());
    let _ = writeln!(out, "Avg streak:  {}", stats.average_streak_display());
    let _ = writeln!(out, "Consistency: {}%  (last 30 days)", stats.consistency_display());

    let _ = writeln!(out, "\n{}-{:02}", heatmap.year, heatmap.month);
    out.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");
    for week in heatmap.weeks() {
        for cell in week {
            match cell {
                Some(cell) => {
                    let marker = if cell.is_today { '*' } else { ' ' };
                    let _ = write!(out, "{}{:>2}{}", marker, cell.date.day(), cell.band.glyph());
                }
                None => out.push_str("    "),
            }
        }
        out.push('\n');
    }
    out.push_str("\n· none  ░ some  ▒ most  █ all   * today\n");

    out.push_str("\nCurrent Streaks\n");
    if store.is_empty() {
        out.push_str("  No habits yet\n");
    }
    for habit in store.habits() {
        let streak = store.streak_count_on(&habit.id, today);
        let _ = writeln!(out, "  {:<20} {} day{}", habit.name, streak, if streak == 1 { "" } else { "s" });
    }

    Ok(out)
}
