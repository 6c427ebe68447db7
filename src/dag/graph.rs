// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::errors::{Result, TaskDagError};
use crate::types::TaskId;

/// Internal node structure: stores immediate dependencies and dependees.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Tasks that must complete before this one.
    dependencies: BTreeSet<TaskId>,
    /// Tasks that list this one as a dependency.
    dependees: BTreeSet<TaskId>,
}

/// In-memory adjacency index keyed by task id.
///
/// Edges are stored twice, once on each endpoint, and every mutation keeps
/// the two copies in sync:
///
/// `Y ∈ node(X).dependencies  ⇔  X ∈ node(Y).dependees`
///
/// The graph is `Clone`, so callers can take a scratch copy (or a
/// [`subgraph`](Self::subgraph)) and mutate it without touching the original.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: HashMap<TaskId, DagNode>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty adjacency entry for `id` if there is none yet.
    pub fn ensure_node(&mut self, id: &TaskId) {
        if !self.nodes.contains_key(id) {
            debug!(task = %id, "created graph node");
            self.nodes.insert(id.clone(), DagNode::default());
        }
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All task ids with a node in this graph.
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.nodes.keys()
    }

    /// Record that `dependee` depends on `dependent`.
    ///
    /// Idempotent: adding an existing edge changes nothing.
    pub fn add_dependency(&mut self, dependee: &TaskId, dependent: &TaskId) -> Result<()> {
        self.ensure_endpoints(dependee, dependent)?;

        if let Some(node) = self.nodes.get_mut(dependee) {
            node.dependencies.insert(dependent.clone());
        }
        if let Some(node) = self.nodes.get_mut(dependent) {
            node.dependees.insert(dependee.clone());
        }

        debug!(dependee = %dependee, dependency = %dependent, "added dependency edge");
        Ok(())
    }

    /// Remove the edge "`dependee` depends on `dependent`" from both endpoints.
    ///
    /// Removing an edge that is not there is a no-op.
    pub fn remove_dependency(&mut self, dependee: &TaskId, dependent: &TaskId) -> Result<()> {
        self.ensure_endpoints(dependee, dependent)?;

        let mut removed = false;
        if let Some(node) = self.nodes.get_mut(dependee) {
            removed |= node.dependencies.remove(dependent);
        }
        if let Some(node) = self.nodes.get_mut(dependent) {
            removed |= node.dependees.remove(dependee);
        }

        if removed {
            debug!(dependee = %dependee, dependency = %dependent, "removed dependency edge");
        }
        Ok(())
    }

    /// Sever every edge touching `id` in both directions, then drop its node.
    pub fn remove_node(&mut self, id: &TaskId) -> Result<()> {
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| TaskDagError::TaskNotFound(id.clone()))?;

        for dep in &node.dependencies {
            if let Some(dep_node) = self.nodes.get_mut(dep) {
                dep_node.dependees.remove(id);
            }
        }
        for dependee in &node.dependees {
            if let Some(dependee_node) = self.nodes.get_mut(dependee) {
                dependee_node.dependencies.remove(id);
            }
        }

        debug!(
            task = %id,
            dependencies = node.dependencies.len(),
            dependees = node.dependees.len(),
            "removed graph node"
        );
        Ok(())
    }

    /// Immediate dependencies of a task.
    pub fn dependencies_of(&self, id: &TaskId) -> Result<&BTreeSet<TaskId>> {
        self.nodes
            .get(id)
            .map(|n| &n.dependencies)
            .ok_or_else(|| TaskDagError::TaskNotFound(id.clone()))
    }

    /// Immediate dependees of a task.
    pub fn dependees_of(&self, id: &TaskId) -> Result<&BTreeSet<TaskId>> {
        self.nodes
            .get(id)
            .map(|n| &n.dependees)
            .ok_or_else(|| TaskDagError::TaskNotFound(id.clone()))
    }

    /// `root` plus everything reachable from it along dependency edges.
    ///
    /// Iterative, and safe on cyclic graphs (each node is visited once).
    pub fn dependency_closure(&self, root: &TaskId) -> Result<HashSet<TaskId>> {
        if !self.contains(root) {
            return Err(TaskDagError::TaskNotFound(root.clone()));
        }

        let mut stack: Vec<&TaskId> = vec![root];
        let mut visited: HashSet<TaskId> = HashSet::new();

        while let Some(id) = stack.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }
            if let Some(node) = self.nodes.get(id) {
                stack.extend(node.dependencies.iter());
            }
        }

        Ok(visited)
    }

    /// Copy of the graph restricted to `ids`.
    ///
    /// Edges with an endpoint outside `ids` are dropped on both sides, so the
    /// result still satisfies edge symmetry.
    pub fn subgraph(&self, ids: &HashSet<TaskId>) -> DependencyGraph {
        let nodes = self
            .nodes
            .iter()
            .filter(|(id, _)| ids.contains(*id))
            .map(|(id, node)| {
                let scoped = DagNode {
                    dependencies: node
                        .dependencies
                        .iter()
                        .filter(|d| ids.contains(*d))
                        .cloned()
                        .collect(),
                    dependees: node
                        .dependees
                        .iter()
                        .filter(|d| ids.contains(*d))
                        .cloned()
                        .collect(),
                };
                (id.clone(), scoped)
            })
            .collect();

        DependencyGraph { nodes }
    }

    /// Read-only, ordered export of the whole adjacency structure.
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self
            .nodes
            .iter()
            .map(|(id, node)| {
                (
                    id.clone(),
                    NodeSnapshot {
                        dependencies: node.dependencies.iter().cloned().collect(),
                        dependees: node.dependees.iter().cloned().collect(),
                    },
                )
            })
            .collect();

        GraphSnapshot { nodes }
    }

    fn ensure_endpoints(&self, dependee: &TaskId, dependent: &TaskId) -> Result<()> {
        if !self.contains(dependee) {
            return Err(TaskDagError::DependeeNotFound(dependee.clone()));
        }
        if !self.contains(dependent) {
            return Err(TaskDagError::DependencyNotFound(dependent.clone()));
        }
        Ok(())
    }
}

/// Adjacency entry of a [`GraphSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub dependencies: Vec<TaskId>,
    pub dependees: Vec<TaskId>,
}

/// Owned copy of the adjacency structure, ordered by task id, for
/// introspection and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    pub nodes: BTreeMap<TaskId, NodeSnapshot>,
}

impl GraphSnapshot {
    pub fn get(&self, id: &TaskId) -> Option<&NodeSnapshot> {
        self.nodes.get(id)
    }
}
