// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::TaskId;

#[derive(Error, Debug)]
pub enum TaskDagError {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Dependee task not found: {0}")]
    DependeeNotFound(TaskId),

    #[error("Dependency task not found: {0}")]
    DependencyNotFound(TaskId),

    #[error("Invalid task: {0}")]
    InvalidTask(String),

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TaskDagError {
    /// True for any of the "id does not exist" variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TaskDagError::TaskNotFound(_)
                | TaskDagError::DependeeNotFound(_)
                | TaskDagError::DependencyNotFound(_)
        )
    }

    /// The offending id, for the not-found variants.
    pub fn missing_id(&self) -> Option<&TaskId> {
        match self {
            TaskDagError::TaskNotFound(id)
            | TaskDagError::DependeeNotFound(id)
            | TaskDagError::DependencyNotFound(id) => Some(id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskDagError>;
