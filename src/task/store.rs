// src/task/store.rs

//! Keyed storage of task records.
//!
//! The store knows nothing about edges; graph-side cleanup on removal is the
//! caller's job (see [`crate::dag::DependencyGraph::remove_node`]).

use std::collections::HashMap;

use crate::errors::{Result, TaskDagError};
use crate::task::model::Task;
use crate::types::TaskId;

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: HashMap<TaskId, Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by id, returning the previous record if there was one.
    pub fn put(&mut self, task: Task) -> Option<Task> {
        self.tasks.insert(task.id().clone(), task)
    }

    pub fn get(&self, id: &TaskId) -> Result<&Task> {
        self.tasks
            .get(id)
            .ok_or_else(|| TaskDagError::TaskNotFound(id.clone()))
    }

    pub fn get_mut(&mut self, id: &TaskId) -> Result<&mut Task> {
        self.tasks
            .get_mut(id)
            .ok_or_else(|| TaskDagError::TaskNotFound(id.clone()))
    }

    pub fn remove(&mut self, id: &TaskId) -> Result<Task> {
        self.tasks
            .remove(id)
            .ok_or_else(|| TaskDagError::TaskNotFound(id.clone()))
    }

    pub fn exists(&self, id: &TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &TaskId> {
        self.tasks.keys()
    }
}
