/// End-to-end workflow over an on-disk SQLite database
use chrono::NaiveDate;
use daily_streak::*;
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn open(dir: &TempDir, today: NaiveDate) -> HabitStore<SqliteStorage, FixedClock> {
    let storage = SqliteStorage::new(dir.path().join("habits.db")).expect("Failed to open storage");
    HabitStore::open(HabitRepository::new(storage), FixedClock::on(today))
        .expect("Failed to open store")
}

#[test]
fn test_state_survives_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let (run_id, read_id) = {
        let mut store = open(&dir, day(3));
        let run = store.add_habit("Run").unwrap();
        let read = store.add_habit("Read").unwrap();
        store.add_habit("Stretch").unwrap();

        for d in 1..=3 {
            store.toggle_completion(&run.id, day(d)).unwrap();
        }
        store.toggle_today(&read.id).unwrap();
        store.reorder_habit(2, 0).unwrap();
        (run.id, read.id)
    };

    let store = open(&dir, day(3));
    let names: Vec<String> = store.list_habits().into_iter().map(|h| h.name).collect();
    assert_eq!(names, vec!["Stretch", "Run", "Read"]);
    assert_eq!(
        store.list_habits().iter().map(|h| h.order).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_eq!(store.streak_count(&run_id), 3);
    assert_eq!(store.streak_count(&read_id), 1);
    assert!(!store.is_completed(&read_id, day(2)));
}

#[test]
fn test_slots_hold_json_documents() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    {
        let mut store = open(&dir, day(1));
        let a = store.add_habit("A").unwrap();
        store.toggle_today(&a.id).unwrap();
    }

    let storage = SqliteStorage::new(dir.path().join("habits.db")).unwrap();
    let habits: serde_json::Value =
        serde_json::from_str(&storage.get(HABITS_SLOT).unwrap().unwrap()).unwrap();
    let completions: serde_json::Value =
        serde_json::from_str(&storage.get(COMPLETIONS_SLOT).unwrap().unwrap()).unwrap();

    assert_eq!(habits[0]["name"], "A");
    assert_eq!(habits[0]["order"], 0);
    assert_eq!(completions[0]["date"], "2024-01-01");
    assert_eq!(completions[0]["completed"], true);
}

#[test]
fn test_deleted_habit_leaves_orphan_records() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = open(&dir, day(1));
    let a = store.add_habit("A").unwrap();
    store.add_habit("B").unwrap();
    store.toggle_today(&a.id).unwrap();

    store.delete_habit(&a.id).unwrap();

    let store = open(&dir, day(1));
    assert_eq!(store.len(), 1);
    assert_eq!(store.completions().len(), 1);
    // Orphans never show up in aggregates
    assert_eq!(store.analytics().today_completion_percentage(), 0.0);
}
