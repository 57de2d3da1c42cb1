//! Persistence tests against real files
mod common;

use std::fs;
use tasklist::{Storage, Task, TaskError, TaskStore};

fn sample_store() -> TaskStore {
    let mut store = TaskStore::new();
    store.create("Groceries", "milk, eggs", "High", "15-06-2024").unwrap();
    store.create("", "", "", "01-01-1900").unwrap();
    store.create("Taxes", "file online", "urgent", "31-12-2100").unwrap();
    store.mark_completed(2).unwrap();
    store
}

#[test]
fn test_round_trip_reconstructs_tasks() {
    let dir = common::get_test_dir();
    let storage = Storage::new(dir.path().join("tasks.txt"));
    let store = sample_store();

    storage.save(store.tasks()).unwrap();
    let loaded = TaskStore::from_tasks(storage.load().unwrap());

    assert_eq!(loaded.tasks(), store.tasks());
}

#[test]
fn test_file_layout() {
    let dir = common::get_test_dir();
    let path = dir.path().join("tasks.txt");
    let storage = Storage::new(&path);

    storage.save(sample_store().tasks()).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert!(content.starts_with("Groceries\nmilk, eggs\nHigh\n15-06-2024\n0\n\n\n\n\n01-01-1900\n1\n\n"));
    assert_eq!(content.lines().count(), 18);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = common::get_test_dir();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "stale contents that are much longer than the new file\n").unwrap();
    let storage = Storage::new(&path);

    storage
        .save(&[Task::new("Only", "one", "Low", "02-02-2024")])
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Only\none\nLow\n02-02-2024\n0\n\n");
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = common::get_test_dir();
    let storage = Storage::new(dir.path().join("nothing-here.txt"));
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_loaded_dates_are_not_revalidated() {
    let dir = common::get_test_dir();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "Old\nimported\nMedium\n2020/01/01\n0\n\n").unwrap();

    let tasks = Storage::new(&path).load().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].due_date, "2020/01/01");
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = common::get_test_dir();
    let storage = Storage::new(dir.path().join("no").join("such").join("tasks.txt"));

    let err = storage.save(&[]).unwrap_err();
    assert!(matches!(err, TaskError::FileOpenFailure { .. }));
    assert_eq!(err.to_string(), "Error saving tasks!");
}

#[test]
fn test_latin1_bytes_load_best_effort() {
    let dir = common::get_test_dir();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, b"Caf\xe9\nlunch\nHigh\n15-06-2024\n0\n\n").unwrap();

    let tasks = Storage::new(&path).load().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Caf\u{FFFD}");
    assert_eq!(tasks[0].description, "lunch");
    assert_eq!(tasks[0].due_date, "15-06-2024");
}

#[test]
fn test_unreadable_data_file_is_load_error() {
    let dir = common::get_test_dir();
    let storage = Storage::new(dir.path());

    let err = storage.load().unwrap_err();
    assert!(matches!(err, TaskError::FileRead { .. }));
    assert_eq!(
        err.to_string(),
        format!("Error loading tasks from {}", dir.path().display())
    );
}
