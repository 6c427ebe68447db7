// src/dag/mod.rs

//! Dependency graph, urgency and ordering.
//!
//! - [`graph`] holds the mirrored adjacency index over task ids.
//! - [`urgency`] computes per-task Lambda and cumulative path sums.
//! - [`ordering`] produces the urgency-weighted topological order and the
//!   readiness queries built on the graph.
//! - [`validate`] checks for cycles using `petgraph`.

pub mod graph;
pub mod ordering;
pub mod urgency;
pub mod validate;

pub use graph::{DependencyGraph, GraphSnapshot, NodeSnapshot};
pub use ordering::{can_task_be_done, task_ordering, top_goals};
pub use urgency::{cumulative_urgency_sums, lambda};
