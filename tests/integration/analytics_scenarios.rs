/// Scenario tests for streaks and aggregates with a pinned date
use chrono::NaiveDate;
use daily_streak::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn open(storage: &MemoryStorage, today: NaiveDate) -> HabitStore<MemoryStorage, FixedClock> {
    HabitStore::open(HabitRepository::new(storage.clone()), FixedClock::on(today)).unwrap()
}

#[test]
fn test_half_done_then_delete() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage, day(10));
    let a = store.add_habit("A").unwrap();
    let b = store.add_habit("B").unwrap();
    store.toggle_today(&a.id).unwrap();

    assert_eq!(store.analytics().today_completion_percentage(), 50.0);

    store.delete_habit(&a.id).unwrap();
    let habits = store.list_habits();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].id, b.id);
    assert_eq!(habits[0].order, 0);
}

#[test]
fn test_five_day_run_and_a_missed_today() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage, day(6));
    let x = store.add_habit("X").unwrap();
    for d in 1..=5 {
        store.toggle_completion(&x.id, day(d)).unwrap();
    }

    assert_eq!(store.streak_count(&x.id), 0);

    let store = open(&storage, day(5));
    assert_eq!(store.streak_count(&x.id), 5);
}

#[test]
fn test_streak_of_exactly_k() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage, day(20));
    let x = store.add_habit("X").unwrap();

    // Day 16 is missing, so only 17..=20 count
    for d in [10, 11, 12, 13, 14, 15, 17, 18, 19, 20] {
        store.toggle_completion(&x.id, day(d)).unwrap();
    }

    assert_eq!(store.streak_count(&x.id), 4);
}

#[test]
fn test_overview_for_mixed_history() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage, day(30));
    let a = store.add_habit("A").unwrap();
    let b = store.add_habit("B").unwrap();

    // A every day of the window, B never
    for d in 1..=30 {
        store.toggle_completion(&a.id, day(d)).unwrap();
    }
    store.toggle_completion(&b.id, day(29)).unwrap();

    let stats = store.analytics().overview();
    assert_eq!(stats.today_completion_percentage, 50.0);
    assert_eq!(stats.average_streak, 15.0);
    // 29 days at 50%, one day at 100%
    let expected = (29.0 * 0.5 + 1.0) / 30.0 * 100.0;
    assert!((stats.consistency_percentage - expected).abs() < 1e-9);
}

#[test]
fn test_heatmap_for_other_month() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage, day(15));
    let a = store.add_habit("A").unwrap();
    store
        .toggle_completion(&a.id, NaiveDate::from_ymd_opt(2023, 12, 25).unwrap())
        .unwrap();

    let map = store.analytics().month_heatmap(2023, 12).unwrap();
    assert_eq!(map.days.len(), 31);
    assert!(map.days.iter().all(|c| !c.is_today));
    assert_eq!(map.days[24].band, CompletionBand::Complete);
    assert_eq!(
        map.days.iter().filter(|c| c.band == CompletionBand::None).count(),
        30
    );
}
