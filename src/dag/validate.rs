// src/dag/validate.rs

//! Acyclicity checks built on `petgraph`.

use std::collections::HashSet;

use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::DependencyGraph;
use crate::errors::{Result, TaskDagError};
use crate::types::TaskId;

/// Build a petgraph view of the dependency graph, optionally restricted to
/// `scope`.
///
/// Edge direction: dependee -> dependency. If B depends on A we add B -> A,
/// so a path X -> Y means "X transitively depends on Y".
fn to_graphmap<'a>(
    graph: &'a DependencyGraph,
    scope: Option<&HashSet<TaskId>>,
) -> Result<DiGraphMap<&'a str, ()>> {
    let in_scope = |id: &TaskId| scope.is_none_or(|s| s.contains(id));
    let mut map: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in graph.task_ids().filter(|id| in_scope(id)) {
        map.add_node(id.as_str());
    }

    for id in graph.task_ids().filter(|id| in_scope(id)) {
        for dep in graph.dependencies_of(id)?.iter().filter(|d| in_scope(d)) {
            map.add_edge(id.as_str(), dep.as_str(), ());
        }
    }

    Ok(map)
}

/// Whether adding "`dependee` depends on `dependent`" would close a cycle.
///
/// True for a self-edge, or when `dependent` already (transitively) depends
/// on `dependee`.
pub fn would_create_cycle(
    graph: &DependencyGraph,
    dependee: &TaskId,
    dependent: &TaskId,
) -> Result<bool> {
    if dependee == dependent {
        return Ok(true);
    }
    if !graph.contains(dependee) || !graph.contains(dependent) {
        return Ok(false);
    }

    let map = to_graphmap(graph, None)?;
    Ok(has_path_connecting(
        &map,
        dependent.as_str(),
        dependee.as_str(),
        None,
    ))
}

/// Topological order of the `scope` part of the graph, dependees first.
///
/// The task every other task in `scope` hangs off comes first and leaves
/// (tasks with no dependencies in scope) come last. Fails with
/// [`TaskDagError::DagCycle`] if `scope` contains a cycle.
pub fn topological_order(graph: &DependencyGraph, scope: &HashSet<TaskId>) -> Result<Vec<TaskId>> {
    let map = to_graphmap(graph, Some(scope))?;
    let order = toposort(&map, None).map_err(|cycle| cycle_error(cycle.node_id()))?;
    Ok(order.into_iter().map(TaskId::from).collect())
}

/// Fail with [`TaskDagError::DagCycle`] if the graph (or the `scope` part of
/// it) contains a cycle.
pub fn ensure_acyclic(graph: &DependencyGraph, scope: Option<&HashSet<TaskId>>) -> Result<()> {
    let map = to_graphmap(graph, scope)?;

    // A topological sort will fail if there is a cycle.
    match toposort(&map, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(cycle_error(cycle.node_id())),
    }
}

fn cycle_error(task: &str) -> TaskDagError {
    TaskDagError::DagCycle(format!(
        "cycle detected in task graph involving task '{}'",
        task
    ))
}
