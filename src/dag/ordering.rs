// src/dag/ordering.rs

//! Urgency-weighted topological ordering and related readiness queries.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, info, warn};

use crate::dag::graph::DependencyGraph;
use crate::dag::urgency::cumulative_urgency_sums;
use crate::errors::{Result, TaskDagError};
use crate::task::TaskStore;
use crate::types::{TaskId, TieBreak};

/// Queue entry for a task whose dependencies are all satisfied.
///
/// Higher `weight` pops first; equal weights fall back to `tie_break`.
#[derive(Debug, Clone)]
struct ReadyTask {
    weight: f64,
    id: TaskId,
    tie_break: TieBreak,
}

impl Ord for ReadyTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| match self.tie_break {
                // BinaryHeap is a max-heap: the smaller id must compare greater.
                TieBreak::AscendingId => other.id.cmp(&self.id),
                TieBreak::DescendingId => self.id.cmp(&other.id),
            })
    }
}

impl PartialOrd for ReadyTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ReadyTask {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ReadyTask {}

/// Order `root` and everything it transitively depends on.
///
/// Every dependency appears before the tasks that depend on it and `root`
/// comes last. Among tasks that are ready at the same time, the one with the
/// highest cumulative urgency (see [`cumulative_urgency_sums`]) goes first.
///
/// Works on a scratch copy of the closure; `graph` is not modified.
pub fn task_ordering(
    graph: &DependencyGraph,
    tasks: &TaskStore,
    root: &TaskId,
    tie_break: TieBreak,
) -> Result<Vec<TaskId>> {
    // Fails with DagCycle before anything is queued if the closure is cyclic.
    let sums = cumulative_urgency_sums(graph, tasks, root)?;
    let closure = graph.dependency_closure(root)?;
    let weight_of = |id: &TaskId| sums.get(id).copied().unwrap_or(0.0);

    let mut scratch = graph.subgraph(&closure);
    let mut queue: BinaryHeap<ReadyTask> = BinaryHeap::new();

    for id in &closure {
        if scratch.dependencies_of(id)?.is_empty() {
            queue.push(ReadyTask {
                weight: weight_of(id),
                id: id.clone(),
                tie_break,
            });
        }
    }
    debug!(root = %root, closure = closure.len(), leaves = queue.len(), "seeded ordering queue");

    let mut order = Vec::with_capacity(closure.len());

    while let Some(ReadyTask { id, weight, .. }) = queue.pop() {
        debug!(task = %id, weight, "emitting task");

        let newly_ready: Vec<TaskId> = scratch
            .dependees_of(&id)?
            .iter()
            .filter(|dependee| {
                scratch
                    .dependencies_of(dependee)
                    .map(|deps| deps.iter().all(|d| d == &id))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        for ready in newly_ready {
            queue.push(ReadyTask {
                weight: weight_of(&ready),
                id: ready,
                tie_break,
            });
        }

        scratch.remove_node(&id)?;
        order.push(id);
    }

    if order.len() != closure.len() {
        warn!(
            root = %root,
            ordered = order.len(),
            closure = closure.len(),
            "ordering did not cover the closure"
        );
        return Err(TaskDagError::DagCycle(format!(
            "could not order all dependencies of task '{root}'"
        )));
    }

    info!(root = %root, tasks = order.len(), "computed task ordering");
    Ok(order)
}

/// A task can be done once it has no outstanding dependencies.
pub fn can_task_be_done(graph: &DependencyGraph, id: &TaskId) -> Result<bool> {
    Ok(graph.dependencies_of(id)?.is_empty())
}

/// Tasks nothing depends on, sorted by id.
pub fn top_goals(graph: &DependencyGraph) -> Vec<TaskId> {
    let mut goals: Vec<TaskId> = graph
        .task_ids()
        .filter(|id| {
            graph
                .dependees_of(id)
                .map(|dependees| dependees.is_empty())
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    goals.sort();
    goals
}
