// src/dag/urgency.rs

//! Urgency ("Lambda") of a single task and cumulative urgency over paths.

use std::collections::HashMap;

use tracing::trace;

use crate::dag::graph::DependencyGraph;
use crate::dag::validate::topological_order;
use crate::errors::Result;
use crate::task::TaskStore;
use crate::types::TaskId;

/// Hazard-rate style urgency: `ln(1 / p) / t`.
///
/// Grows as the success probability drops or the time budget shrinks. Only
/// meaningful for `0 < p <= 1` and `t > 0`; [`crate::task::Task`] enforces
/// both at construction.
pub fn lambda(probability_success: f64, estimated_time_to_completion: f64) -> f64 {
    // `0.0 - ln p` stays finite for subnormal p and gives +0.0 at p = 1.
    (0.0 - probability_success.ln()) / estimated_time_to_completion
}

/// Accumulated urgency for every task reachable from `root` along dependency
/// edges.
///
/// Along one path from `root` the running sum at task `T` is the running sum
/// of the task it was reached from plus `lambda(T)`. A task's total is the sum
/// of its running sums over every path from `root`, so a task reachable by
/// several paths collects one contribution per path.
///
/// Paths are not enumerated. Tasks are visited once in topological order,
/// each carrying the number of paths reaching it and the total over those
/// paths; a dependency adds `total + paths * lambda` from each dependee in
/// the closure. Fails with [`crate::TaskDagError::DagCycle`] if the closure
/// is cyclic.
pub fn cumulative_urgency_sums(
    graph: &DependencyGraph,
    tasks: &TaskStore,
    root: &TaskId,
) -> Result<HashMap<TaskId, f64>> {
    let closure = graph.dependency_closure(root)?;
    let order = topological_order(graph, &closure)?;

    let mut paths: HashMap<TaskId, f64> = HashMap::with_capacity(order.len());
    let mut sums: HashMap<TaskId, f64> = HashMap::with_capacity(order.len());

    for id in order {
        let lambda = tasks.get(&id)?.lambda();

        let (count, total) = if &id == root {
            (1.0, lambda)
        } else {
            graph
                .dependees_of(&id)?
                .iter()
                .filter(|dependee| closure.contains(*dependee))
                .fold((0.0, 0.0), |(count, total), dependee| {
                    let via = paths.get(dependee).copied().unwrap_or(0.0);
                    let sum = sums.get(dependee).copied().unwrap_or(0.0);
                    (count + via, total + sum + via * lambda)
                })
        };

        trace!(task = %id, paths = count, total, "cumulative urgency");
        paths.insert(id.clone(), count);
        sums.insert(id, total);
    }

    Ok(sums)
}
