// src/lib.rs

//! In-memory task dependency graph with urgency-weighted ordering.
//!
//! Tasks carry a success probability and a time estimate, from which an
//! urgency score (`ln(1/p) / t`) is derived. [`TaskManager`] keeps the tasks
//! and their dependency edges consistent and answers ordering queries: given
//! a goal, which of its prerequisites to work on first.
//!
//! ```
//! use taskdag::{Task, TaskId, TaskManager};
//!
//! let mut manager = TaskManager::new();
//! manager.put_task(Task::with_id("ship", "ship it", 0.5, 1.0)?, &[], &[])?;
//! manager.put_task(Task::with_id("test", "write tests", 0.5, 1.0)?, &[], &[TaskId::from("ship")])?;
//! manager.put_task(Task::with_id("fix", "fix the bug", 0.1, 1.0)?, &[], &[TaskId::from("ship")])?;
//!
//! let order = manager.task_ordering(&TaskId::from("ship"))?;
//! assert_eq!(order, vec![TaskId::from("fix"), TaskId::from("test"), TaskId::from("ship")]);
//! # Ok::<(), taskdag::TaskDagError>(())
//! ```

pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod manager;
pub mod task;
pub mod types;

pub use config::ManagerConfig;
pub use dag::{DependencyGraph, GraphSnapshot, NodeSnapshot};
pub use errors::{Result, TaskDagError};
pub use manager::{SharedTaskManager, TaskManager};
pub use task::{Task, TaskStore};
pub use types::{LogLevel, TaskId, TieBreak};
