// src/manager/shared.rs

//! Thread-safe handle around a [`TaskManager`].
//!
//! Mutations are multi-step (e.g. removing a task severs several edges before
//! deleting the node and the record), so the whole manager sits behind one
//! `RwLock`: a mutation holds the write lock for its full duration, queries
//! share the read lock.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ManagerConfig;
use crate::dag::GraphSnapshot;
use crate::errors::Result;
use crate::manager::TaskManager;
use crate::task::Task;
use crate::types::TaskId;

#[derive(Debug, Clone, Default)]
pub struct SharedTaskManager {
    inner: Arc<RwLock<TaskManager>>,
}

impl SharedTaskManager {
    pub fn new(manager: TaskManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        Self::new(TaskManager::with_config(config))
    }

    // No operation leaves the manager half-updated on panic, so a poisoned
    // lock still guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, TaskManager> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TaskManager> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run an arbitrary query under the read lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&TaskManager) -> R) -> R {
        f(&self.read())
    }

    /// Run several mutations as one unit under the write lock.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut TaskManager) -> R) -> R {
        f(&mut self.write())
    }

    pub fn put_task(&self, task: Task, dependencies: &[TaskId], dependees: &[TaskId]) -> Result<()> {
        self.write().put_task(task, dependencies, dependees)
    }

    pub fn get_task(&self, id: &TaskId) -> Result<Task> {
        self.read().get_task(id).cloned()
    }

    pub fn remove_task(&self, id: &TaskId) -> Result<Task> {
        self.write().remove_task(id)
    }

    pub fn add_dependency(&self, dependee: &TaskId, dependent: &TaskId) -> Result<()> {
        self.write().add_dependency(dependee, dependent)
    }

    pub fn remove_dependency(&self, dependee: &TaskId, dependent: &TaskId) -> Result<()> {
        self.write().remove_dependency(dependee, dependent)
    }

    pub fn set_task_done(&self, id: &TaskId, done: bool) -> Result<()> {
        self.write().set_task_done(id, done)
    }

    pub fn representation(&self) -> GraphSnapshot {
        self.read().representation()
    }

    pub fn top_goals(&self) -> Vec<TaskId> {
        self.read().top_goals()
    }

    pub fn task_dependencies(&self, id: &TaskId) -> Result<Vec<TaskId>> {
        self.read().task_dependencies(id)
    }

    pub fn task_dependees(&self, id: &TaskId) -> Result<Vec<TaskId>> {
        self.read().task_dependees(id)
    }

    pub fn can_task_be_done(&self, id: &TaskId) -> Result<bool> {
        self.read().can_task_be_done(id)
    }

    pub fn task_ordering(&self, root: &TaskId) -> Result<Vec<TaskId>> {
        self.read().task_ordering(root)
    }

    pub fn cumulative_urgency(&self, root: &TaskId) -> Result<HashMap<TaskId, f64>> {
        self.read().cumulative_urgency(root)
    }
}
