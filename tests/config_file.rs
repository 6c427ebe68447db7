// tests/config_file.rs

use std::io::Write;

use tempfile::NamedTempFile;
use taskdag::config::{from_toml_str, load_from_path};
use taskdag::{ManagerConfig, TaskDagError, TaskId, TaskManager, TieBreak};
use taskdag_test_utils::builders::ManagerBuilder;
use taskdag_test_utils::init_tracing;

#[test]
fn config_file_drives_manager_behaviour() {
    init_tracing();

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[graph]
reject_cycles = false

[ordering]
tie_break = "descending_id"
"#
    )
    .unwrap();

    let cfg = load_from_path(file.path()).unwrap();
    assert!(!cfg.graph.reject_cycles);
    assert_eq!(cfg.ordering.tie_break, TieBreak::DescendingId);

    let mut manager = TaskManager::with_config(cfg);
    for name in ["root", "x", "y"] {
        manager
            .put_task(
                taskdag::Task::with_id(name, name, 0.5, 1.0).unwrap(),
                &[],
                &[],
            )
            .unwrap();
    }
    manager
        .put_task(
            taskdag::Task::with_id("root", "root", 0.5, 1.0).unwrap(),
            &[TaskId::from("x"), TaskId::from("y")],
            &[],
        )
        .unwrap();

    let order = manager.task_ordering(&TaskId::from("root")).unwrap();
    assert_eq!(
        order,
        vec![TaskId::from("y"), TaskId::from("x"), TaskId::from("root")]
    );
}

#[test]
fn malformed_config_file_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[ordering]\ntie_break = 3\n").unwrap();

    match load_from_path(file.path()) {
        Err(TaskDagError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(cfg) => panic!("Expected error, got {:?}", cfg),
    }
}

#[test]
fn cycles_without_rejection_are_flagged_by_ordering() {
    init_tracing();

    let mut manager = ManagerBuilder::new()
        .reject_cycles(false)
        .task("a", 0.5, 1.0)
        .task("b", 0.5, 1.0)
        .task("c", 0.5, 1.0)
        .depends_on("a", "b")
        .depends_on("b", "c")
        .build();

    manager
        .add_dependency(&TaskId::from("c"), &TaskId::from("a"))
        .unwrap();

    match manager.task_ordering(&TaskId::from("a")) {
        Err(TaskDagError::DagCycle(msg)) => assert!(msg.contains("cycle detected")),
        other => panic!("Expected DagCycle, got {:?}", other),
    }

    // Readiness queries do not walk the graph and keep working.
    assert!(!manager.can_task_be_done(&TaskId::from("a")).unwrap());
    assert!(manager.top_goals().is_empty());
}

#[test]
fn empty_input_yields_defaults() {
    let cfg = from_toml_str("").unwrap();
    assert_eq!(cfg, ManagerConfig::default());
    assert!(cfg.graph.reject_cycles);
    assert_eq!(cfg.ordering.tie_break, TieBreak::AscendingId);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = from_toml_str("[graph]\nallow_loops = true\n").unwrap_err();
    assert!(matches!(err, TaskDagError::TomlError(_)));
}

#[test]
fn invalid_tie_break_is_rejected() {
    let err = from_toml_str("[ordering]\ntie_break = \"random\"\n").unwrap_err();
    assert!(matches!(err, TaskDagError::TomlError(_)));
}

#[test]
fn missing_config_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskdag.toml");

    match load_from_path(&path) {
        Err(TaskDagError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        Err(e) => panic!("Expected IoError, got: {:?}", e),
        Ok(cfg) => panic!("Expected error, got {:?}", cfg),
    }
}
