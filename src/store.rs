/// The habit store: in-memory habits and completions with write-through
/// persistence
///
/// Every mutation builds the updated collection, writes it through the
/// repository, and only then swaps it into memory. A failed write therefore
/// leaves the store exactly as it was before the call.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::analytics::AnalyticsEngine;
use crate::clock::{Clock, SystemClock};
use crate::domain::{habit, habit_streak, CompletionLog, Habit, HabitId};
use crate::storage::{HabitRepository, KeyValueStore};
use crate::TrackerError;

pub struct HabitStore<S: KeyValueStore, C: Clock = SystemClock> {
    repository: HabitRepository<S>,
    clock: C,
    /// Always sorted by `order`, with order equal to position
    habits: Vec<Habit>,
    completions: CompletionLog,
}

impl<S: KeyValueStore> HabitStore<S, SystemClock> {
    /// Open a store on the wall clock
    pub fn open_with_system_clock(store: S) -> Result<Self, TrackerError> {
        Self::open(HabitRepository::new(store), SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> HabitStore<S, C> {
    /// Load both collections from the repository
    pub fn open(repository: HabitRepository<S>, clock: C) -> Result<Self, TrackerError> {
        let mut habits = repository.load_habits()?;
        let completions = repository.load_completions()?;

        habit::sort_by_order(&mut habits);
        let dense = habits.iter().enumerate().all(|(i, h)| h.order == i as u32);
        if !dense {
            warn!("Stored habit order was not dense; renumbering {} habits", habits.len());
            habit::renumber(&mut habits);
        }

        let duplicates = completions.duplicate_count();
        if duplicates > 0 {
            warn!("Ignoring {} duplicate completion records", duplicates);
        }

        debug!(
            "Opened habit store with {} habits and {} completion records",
            habits.len(),
            completions.len()
        );

        Ok(Self {
            repository,
            clock,
            habits,
            completions,
        })
    }

    /// Habits in display order
    pub fn list_habits(&self) -> Vec<Habit> {
        self.habits.clone()
    }

    /// Borrow the habits in display order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn completions(&self) -> &CompletionLog {
        &self.completions
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn habit(&self, habit_id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == habit_id)
    }

    pub fn habit_at(&self, index: usize) -> Option<&Habit> {
        self.habits.get(index)
    }

    pub fn position_of(&self, habit_id: &HabitId) -> Option<usize> {
        self.habits.iter().position(|h| &h.id == habit_id)
    }

    /// The local day the store currently considers "today"
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Append a new habit to the end of the list
    pub fn add_habit(&mut self, name: &str) -> Result<Habit, TrackerError> {
        let habit = Habit::new(name, self.habits.len() as u32, self.clock.now())?;

        let mut updated = self.habits.clone();
        updated.push(habit.clone());
        self.commit_habits(updated)?;

        debug!("Added habit '{}' ({}) at position {}", habit.name, habit.id, habit.order);
        Ok(habit)
    }

    /// Remove a habit; unknown ids are ignored
    ///
    /// Completion records for the habit are left in place.
    pub fn delete_habit(&mut self, habit_id: &HabitId) -> Result<(), TrackerError> {
        let Some(position) = self.position_of(habit_id) else {
            debug!("Delete ignored, no habit with id {}", habit_id);
            return Ok(());
        };

        let mut updated = self.habits.clone();
        let removed = updated.remove(position);
        habit::renumber(&mut updated);
        self.commit_habits(updated)?;

        debug!("Deleted habit '{}' ({})", removed.name, removed.id);
        Ok(())
    }

    /// Move the habit at `from` to position `to`
    ///
    /// Out-of-range indices are rejected without touching anything.
    pub fn reorder_habit(&mut self, from: usize, to: usize) -> Result<(), TrackerError> {
        let mut updated = self.habits.clone();
        habit::move_habit(&mut updated, from, to)?;

        if from == to {
            return Ok(());
        }

        self.commit_habits(updated)?;

        debug!("Moved habit from position {} to {}", from, to);
        Ok(())
    }

    /// Flip the completion flag for (habit, day); returns the new state
    ///
    /// Unknown ids are ignored and report `false` without writing.
    pub fn toggle_completion(&mut self, habit_id: &HabitId, date: NaiveDate) -> Result<bool, TrackerError> {
        if self.habit(habit_id).is_none() {
            debug!("Toggle ignored, no habit with id {}", habit_id);
            return Ok(false);
        }

        let mut updated = self.completions.clone();
        let completed = updated.toggle(habit_id, date);

        self.repository.save_completions(&updated)?;
        self.completions = updated;

        debug!("Habit {} on {} is now {}", habit_id, date, if completed { "done" } else { "not done" });
        Ok(completed)
    }

    /// Toggle for the clock's current day
    pub fn toggle_today(&mut self, habit_id: &HabitId) -> Result<bool, TrackerError> {
        let today = self.clock.today();
        self.toggle_completion(habit_id, today)
    }

    pub fn is_completed(&self, habit_id: &HabitId, date: NaiveDate) -> bool {
        self.completions.is_completed(habit_id, date)
    }

    /// Consecutive completed days ending today
    pub fn streak_count(&self, habit_id: &HabitId) -> u32 {
        self.streak_count_on(habit_id, self.clock.today())
    }

    /// Consecutive completed days ending on `today`
    pub fn streak_count_on(&self, habit_id: &HabitId, today: NaiveDate) -> u32 {
        habit_streak(&self.completions, habit_id, today)
    }

    /// Each habit in display order with whether it is done today
    pub fn today_checklist(&self) -> Vec<(Habit, bool)> {
        let today = self.clock.today();
        self.habits
            .iter()
            .map(|h| (h.clone(), self.completions.is_completed(&h.id, today)))
            .collect()
    }

    /// Aggregates over the current data, pinned to today
    pub fn analytics(&self) -> AnalyticsEngine<'_> {
        AnalyticsEngine::new(&self.habits, &self.completions, self.clock.today())
    }

    fn commit_habits(&mut self, updated: Vec<Habit>) -> Result<(), TrackerError> {
        self.repository.save_habits(&updated)?;
        self.habits = updated;
        Ok(())
    }
}
