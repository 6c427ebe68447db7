// src/manager/mod.rs

//! Public facade over the task store, dependency graph and ordering engine.
//!
//! [`TaskManager`] is the single-threaded core. [`SharedTaskManager`] wraps
//! it in a lock for use from several threads.

pub mod shared;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::ManagerConfig;
use crate::dag::graph::{DependencyGraph, GraphSnapshot};
use crate::dag::{ordering, urgency, validate};
use crate::errors::{Result, TaskDagError};
use crate::task::{Task, TaskStore};
use crate::types::TaskId;

pub use shared::SharedTaskManager;

/// Task store plus dependency graph, kept consistent with each other.
///
/// Every task in the store has a graph node and vice versa, and every id
/// referenced by an edge belongs to an existing task. Each operation checks
/// the ids it touches before mutating anything.
#[derive(Debug, Clone, Default)]
pub struct TaskManager {
    store: TaskStore,
    graph: DependencyGraph,
    config: ManagerConfig,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        Self {
            store: TaskStore::new(),
            graph: DependencyGraph::new(),
            config,
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.store.iter()
    }

    /// Store `task` and attach the given edges.
    ///
    /// `dependencies` are tasks the new task depends on; `dependees` are tasks
    /// that depend on it. Re-putting an existing id replaces the record but
    /// keeps its edges.
    ///
    /// Not atomic: edges are applied in order and the first failure is
    /// returned as-is. The task record and any edges applied before the
    /// failure stay in place.
    pub fn put_task(
        &mut self,
        task: Task,
        dependencies: &[TaskId],
        dependees: &[TaskId],
    ) -> Result<()> {
        let id = task.id().clone();
        let replaced = self.store.put(task).is_some();
        self.graph.ensure_node(&id);
        debug!(task = %id, replaced, "stored task");

        for dependency in dependencies {
            self.add_dependency(&id, dependency)?;
        }
        for dependee in dependees {
            self.add_dependency(dependee, &id)?;
        }

        Ok(())
    }

    pub fn get_task(&self, id: &TaskId) -> Result<&Task> {
        self.store.get(id)
    }

    /// Detach `id` from every neighbour, then delete its node and record.
    pub fn remove_task(&mut self, id: &TaskId) -> Result<Task> {
        self.ensure_exists(id)?;

        self.graph.remove_node(id)?;
        let task = self.store.remove(id)?;
        debug!(task = %id, "removed task");
        Ok(task)
    }

    /// Record that `dependee` depends on `dependent`.
    ///
    /// Adding an edge that already exists is a no-op. With
    /// `graph.reject_cycles` enabled (the default), an edge that would close a
    /// cycle fails with [`TaskDagError::DagCycle`] and nothing changes.
    pub fn add_dependency(&mut self, dependee: &TaskId, dependent: &TaskId) -> Result<()> {
        if !self.store.exists(dependee) {
            return Err(TaskDagError::DependeeNotFound(dependee.clone()));
        }
        if !self.store.exists(dependent) {
            return Err(TaskDagError::DependencyNotFound(dependent.clone()));
        }

        if self.config.graph.reject_cycles
            && validate::would_create_cycle(&self.graph, dependee, dependent)?
        {
            warn!(dependee = %dependee, dependency = %dependent, "rejected edge that would create a cycle");
            return Err(TaskDagError::DagCycle(format!(
                "task '{dependee}' cannot depend on '{dependent}': '{dependent}' already depends on it"
            )));
        }

        self.graph.add_dependency(dependee, dependent)
    }

    /// Remove the edge "`dependee` depends on `dependent`". Absent edges are a
    /// no-op.
    pub fn remove_dependency(&mut self, dependee: &TaskId, dependent: &TaskId) -> Result<()> {
        if !self.store.exists(dependee) {
            return Err(TaskDagError::DependeeNotFound(dependee.clone()));
        }
        if !self.store.exists(dependent) {
            return Err(TaskDagError::DependencyNotFound(dependent.clone()));
        }

        self.graph.remove_dependency(dependee, dependent)
    }

    /// Set the `is_done` flag of a task.
    pub fn set_task_done(&mut self, id: &TaskId, done: bool) -> Result<()> {
        self.store.get_mut(id)?.set_done(done);
        debug!(task = %id, done, "updated done flag");
        Ok(())
    }

    /// Ordered copy of the full adjacency structure.
    pub fn representation(&self) -> GraphSnapshot {
        self.graph.snapshot()
    }

    /// Tasks that nothing depends on, sorted by id.
    pub fn top_goals(&self) -> Vec<TaskId> {
        ordering::top_goals(&self.graph)
    }

    /// Direct dependencies of `id`, sorted by id.
    pub fn task_dependencies(&self, id: &TaskId) -> Result<Vec<TaskId>> {
        self.ensure_exists(id)?;
        Ok(self.graph.dependencies_of(id)?.iter().cloned().collect())
    }

    /// Direct dependees of `id`, sorted by id.
    pub fn task_dependees(&self, id: &TaskId) -> Result<Vec<TaskId>> {
        self.ensure_exists(id)?;
        Ok(self.graph.dependees_of(id)?.iter().cloned().collect())
    }

    pub fn can_task_be_done(&self, id: &TaskId) -> Result<bool> {
        self.ensure_exists(id)?;
        ordering::can_task_be_done(&self.graph, id)
    }

    /// Urgency-weighted topological order of `root` and its transitive
    /// dependencies, ending with `root`.
    pub fn task_ordering(&self, root: &TaskId) -> Result<Vec<TaskId>> {
        self.ensure_exists(root)?;
        ordering::task_ordering(
            &self.graph,
            &self.store,
            root,
            self.config.ordering.tie_break,
        )
    }

    /// Lambda of a single task.
    pub fn task_urgency(&self, id: &TaskId) -> Result<f64> {
        Ok(self.store.get(id)?.lambda())
    }

    /// Cumulative urgency of every task in `root`'s closure.
    pub fn cumulative_urgency(&self, root: &TaskId) -> Result<HashMap<TaskId, f64>> {
        self.ensure_exists(root)?;
        urgency::cumulative_urgency_sums(&self.graph, &self.store, root)
    }

    fn ensure_exists(&self, id: &TaskId) -> Result<()> {
        if self.store.exists(id) {
            Ok(())
        } else {
            Err(TaskDagError::TaskNotFound(id.clone()))
        }
    }
}
