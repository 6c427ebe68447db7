// tests/task_records.rs

use taskdag::{LogLevel, Task, TaskDagError, TaskId, TaskStore, TieBreak};

fn task(id: &str) -> Task {
    Task::with_id(id, format!("task {id}"), 0.5, 1.0).unwrap()
}

#[test]
fn generated_ids_are_unique() {
    let a = TaskId::generate();
    let b = TaskId::generate();
    assert_ne!(a, b);
}

#[test]
fn ids_order_lexicographically() {
    let mut ids = vec![TaskId::from("task3"), TaskId::from("task1"), TaskId::from("task2")];
    ids.sort();
    let names: Vec<&str> = ids.iter().map(TaskId::as_str).collect();
    assert_eq!(names, vec!["task1", "task2", "task3"]);
}

#[test]
fn tie_break_parses_case_insensitively() {
    assert!(matches!("Ascending_Id".parse::<TieBreak>(), Ok(TieBreak::AscendingId)));
    assert!(matches!(" descending ".parse::<TieBreak>(), Ok(TieBreak::DescendingId)));
}

#[test]
fn unknown_tie_break_is_a_config_error() {
    match "random".parse::<TieBreak>() {
        Err(TaskDagError::ConfigError(msg)) => assert!(msg.contains("random")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn log_level_accepts_warning_alias() {
    assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert!("loud".parse::<LogLevel>().is_err());
}

#[test]
fn new_task_is_not_done_and_has_generated_id() {
    let task = Task::new("write report", 0.5, 2.0).unwrap();
    assert!(!task.is_done());
    assert_eq!(task.name(), "write report");
    assert!(!task.id().as_str().is_empty());
}

#[test]
fn probability_of_one_is_accepted_and_has_zero_urgency() {
    let task = Task::with_id("sure", "sure thing", 1.0, 3.0).unwrap();
    assert_eq!(task.lambda(), 0.0);
}

#[test]
fn rejects_out_of_range_probability() {
    for p in [0.0, -0.1, 1.5, 12.0, f64::NAN] {
        let err = Task::with_id("t", "t", p, 1.0).unwrap_err();
        assert!(matches!(err, TaskDagError::InvalidTask(_)), "p = {p}");
    }
}

#[test]
fn rejects_non_positive_or_infinite_estimate() {
    for t in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        let err = Task::with_id("t", "t", 0.5, t).unwrap_err();
        assert!(matches!(err, TaskDagError::InvalidTask(_)), "t = {t}");
    }
}

#[test]
fn put_then_get_returns_same_record() {
    let mut store = TaskStore::new();
    let t = task("a");
    assert!(store.put(t.clone()).is_none());
    assert_eq!(store.get(&TaskId::from("a")).unwrap(), &t);
    assert!(store.exists(&TaskId::from("a")));
}

#[test]
fn put_overwrites_existing_id() {
    let mut store = TaskStore::new();
    store.put(task("a"));
    let replacement = Task::with_id("a", "renamed", 0.9, 3.0).unwrap();
    let previous = store.put(replacement).unwrap();

    assert_eq!(previous.name(), "task a");
    assert_eq!(store.get(&TaskId::from("a")).unwrap().name(), "renamed");
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_missing_is_not_found() {
    let mut store = TaskStore::new();
    let err = store.remove(&TaskId::from("ghost")).unwrap_err();
    assert!(matches!(err, TaskDagError::TaskNotFound(ref id) if id.as_str() == "ghost"));
}

#[test]
fn remove_deletes_record() {
    let mut store = TaskStore::new();
    store.put(task("a"));
    store.remove(&TaskId::from("a")).unwrap();
    assert!(!store.exists(&TaskId::from("a")));
    assert!(store.is_empty());
}
