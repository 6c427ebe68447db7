// src/task/model.rs

//! Task records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dag::urgency;
use crate::errors::{Result, TaskDagError};
use crate::types::TaskId;

/// A unit of work with a success probability and a time estimate.
///
/// Construction validates the numeric parameters so that [`Task::lambda`] is
/// always finite and non-negative:
/// - `probability_success` must lie in `(0, 1]`
/// - `estimated_time_to_completion` must be finite and `> 0`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    id: TaskId,
    name: String,
    created_at: DateTime<Utc>,
    is_done: bool,
    probability_success: f64,
    estimated_time_to_completion: f64,
}

impl Task {
    /// Create a task with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        probability_success: f64,
        estimated_time_to_completion: f64,
    ) -> Result<Self> {
        Self::with_id(
            TaskId::generate(),
            name,
            probability_success,
            estimated_time_to_completion,
        )
    }

    /// Create a task with a caller-supplied id.
    pub fn with_id(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        probability_success: f64,
        estimated_time_to_completion: f64,
    ) -> Result<Self> {
        let id = id.into();
        validate_probability(&id, probability_success)?;
        validate_estimate(&id, estimated_time_to_completion)?;

        Ok(Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
            is_done: false,
            probability_success,
            estimated_time_to_completion,
        })
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn probability_success(&self) -> f64 {
        self.probability_success
    }

    pub fn estimated_time_to_completion(&self) -> f64 {
        self.estimated_time_to_completion
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.is_done = done;
    }

    /// Urgency score `ln(1 / p) / t`. Derived, never stored.
    pub fn lambda(&self) -> f64 {
        urgency::lambda(self.probability_success, self.estimated_time_to_completion)
    }
}

fn validate_probability(id: &TaskId, p: f64) -> Result<()> {
    if p.is_nan() || p <= 0.0 || p > 1.0 {
        return Err(TaskDagError::InvalidTask(format!(
            "task '{id}' has probability_success {p} outside (0, 1]"
        )));
    }
    Ok(())
}

fn validate_estimate(id: &TaskId, t: f64) -> Result<()> {
    if !t.is_finite() || t <= 0.0 {
        return Err(TaskDagError::InvalidTask(format!(
            "task '{id}' has estimated_time_to_completion {t}; must be finite and > 0"
        )));
    }
    Ok(())
}
