/// Basic unit tests to verify core types behave as exported
use chrono::{NaiveDate, Utc};
use daily_streak::*;

#[test]
fn test_habit_creation() {
    let habit = Habit::new("  Test Habit ", 0, Utc::now()).expect("valid habit");
    assert_eq!(habit.name, "Test Habit");
    assert_eq!(habit.order, 0);
}

#[test]
fn test_error_classification() {
    let storage = MemoryStorage::new();
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let mut store = HabitStore::open(HabitRepository::new(storage.clone()), clock).unwrap();

    let validation = store.add_habit("").unwrap_err();
    assert!(validation.is_validation());

    storage.fail_writes(true);
    let persistence = store.add_habit("Walk").unwrap_err();
    assert!(!persistence.is_validation());
    assert!(persistence.to_string().starts_with("Storage error"));
}

#[test]
fn test_store_accepts_boxed_backends() {
    let backend: Box<dyn KeyValueStore> = Box::new(MemoryStorage::new());
    let clock: Box<dyn Clock> = Box::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    let mut store = HabitStore::open(HabitRepository::new(backend), clock).unwrap();

    let habit = store.add_habit("Floss").unwrap();
    assert!(store.toggle_today(&habit.id).unwrap());
    assert_eq!(store.streak_count(&habit.id), 1);
}

#[test]
fn test_untoggled_pairs_are_not_completed() {
    let storage = MemoryStorage::new();
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let store = HabitStore::open(HabitRepository::new(storage), clock).unwrap();

    let id = HabitId::parse("never-seen").unwrap();
    assert!(!store.is_completed(&id, store.today()));
    assert_eq!(store.streak_count(&id), 0);
}

#[test]
fn test_date_helpers() {
    assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    assert!(matches!(parse_date("yesterday"), Err(DomainError::InvalidDate(_))));
}
