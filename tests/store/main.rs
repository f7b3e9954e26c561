//! WorkoutStore over a real JSON file.

use std::fs;

use serde_json::json;
use tempfile::tempdir;
use workout_log::{
    JsonFileBackend, RecordBackend, WorkoutError, WorkoutStore, SEED_COUNT,
};

fn payload() -> serde_json::Value {
    json!({ "date": "2026-02-10", "exercise": "Kettlebell Swing", "type": "Strength", "sets": 4, "reps": 15, "weight": 53 })
}

#[test]
fn missing_file_is_seeded_on_first_use() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");
    let store = WorkoutStore::new(JsonFileBackend::new(&path));

    assert!(!path.exists());
    let page = store.list(1).unwrap();
    assert_eq!(page.total, SEED_COUNT);
    assert!(path.exists());
}

#[test]
fn corrupt_file_heals_by_reseeding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");
    fs::write(&path, "[{ truncated").unwrap();

    let store = WorkoutStore::new(JsonFileBackend::new(&path));
    store.ensure_seeded().unwrap();

    let records = JsonFileBackend::new(&path).load();
    assert_eq!(records.len(), SEED_COUNT);
}

#[test]
fn writes_survive_a_new_store_instance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");

    let created = {
        let store = WorkoutStore::new(JsonFileBackend::new(&path));
        store.create(&payload()).unwrap()
    };

    let reopened = WorkoutStore::new(JsonFileBackend::new(&path));
    assert_eq!(reopened.get(&created.id).unwrap(), Some(created));
    assert_eq!(reopened.count().unwrap(), SEED_COUNT + 1);
}

#[test]
fn dropping_below_threshold_reseeds_on_next_request() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");
    let store = WorkoutStore::new(JsonFileBackend::new(&path));

    let first = store.list(1).unwrap();
    let victim = first.items[0].id.clone();
    store.delete(&victim).unwrap();
    assert_eq!(store.count().unwrap(), SEED_COUNT - 1);

    let after = store.list(1).unwrap();
    assert_eq!(after.total, SEED_COUNT);
    assert!(after.items.iter().all(|r| r.id != victim));
    assert_eq!(store.get(&victim).unwrap(), None);
}

#[test]
fn update_and_delete_unknown_ids() {
    let dir = tempdir().unwrap();
    let store = WorkoutStore::new(JsonFileBackend::new(dir.path().join("workouts.json")));

    assert!(matches!(
        store.update("ghost", &payload()),
        Err(WorkoutError::NotFound(id)) if id == "ghost"
    ));
    assert!(matches!(
        store.delete("ghost"),
        Err(WorkoutError::NotFound(_))
    ));
}

#[test]
fn unwritable_location_surfaces_store_error() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file in the way").unwrap();

    let store = WorkoutStore::new(JsonFileBackend::new(blocker.join("workouts.json")));
    assert!(store.ensure_seeded().is_err());
    assert!(matches!(
        store.create(&payload()),
        Err(WorkoutError::Store(_))
    ));
}
