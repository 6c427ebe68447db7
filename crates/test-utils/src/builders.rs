#![allow(dead_code)]

use taskdag::{ManagerConfig, Task, TaskId, TaskManager, TieBreak};

/// Builder for `Task` to simplify test setup.
///
/// Defaults to `probability_success = 0.5` and
/// `estimated_time_to_completion = 1.0`.
pub struct TaskBuilder {
    id: String,
    name: Option<String>,
    probability_success: f64,
    estimated_time_to_completion: f64,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            probability_success: 0.5,
            estimated_time_to_completion: 1.0,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn probability(mut self, p: f64) -> Self {
        self.probability_success = p;
        self
    }

    pub fn estimate(mut self, t: f64) -> Self {
        self.estimated_time_to_completion = t;
        self
    }

    pub fn build(self) -> Task {
        let name = self.name.unwrap_or_else(|| self.id.clone());
        Task::with_id(
            self.id.as_str(),
            name,
            self.probability_success,
            self.estimated_time_to_completion,
        )
        .expect("Failed to build valid task from builder")
    }
}

/// Builder for a populated `TaskManager`.
///
/// Tasks are inserted first, then edges, so edges may reference tasks in any
/// order.
pub struct ManagerBuilder {
    config: ManagerConfig,
    tasks: Vec<Task>,
    edges: Vec<(TaskId, TaskId)>,
}

impl ManagerBuilder {
    pub fn new() -> Self {
        Self {
            config: ManagerConfig::default(),
            tasks: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Shorthand for a task with the given id and urgency parameters.
    pub fn task(self, id: &str, p: f64, t: f64) -> Self {
        self.with_task(TaskBuilder::new(id).probability(p).estimate(t).build())
    }

    /// `dependee` depends on `dependent`.
    pub fn depends_on(mut self, dependee: &str, dependent: &str) -> Self {
        self.edges
            .push((TaskId::from(dependee), TaskId::from(dependent)));
        self
    }

    pub fn reject_cycles(mut self, val: bool) -> Self {
        self.config.graph.reject_cycles = val;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.ordering.tie_break = tie_break;
        self
    }

    pub fn build(self) -> TaskManager {
        let mut manager = TaskManager::with_config(self.config);
        for task in self.tasks {
            manager
                .put_task(task, &[], &[])
                .expect("Failed to insert task from builder");
        }
        for (dependee, dependent) in &self.edges {
            manager
                .add_dependency(dependee, dependent)
                .expect("Failed to add edge from builder");
        }
        manager
    }
}

impl Default for ManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
