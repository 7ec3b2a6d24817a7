//! Avoidance constraints layered over solver callbacks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::NodeId;

use super::Cost;

/// Nodes and edges a route must not use.
///
/// Wraps caller callbacks rather than replacing them, so avoidance composes
/// with any admission predicate or weight function.
///
/// # Example
///
/// ```rust
/// use hopfinder_core::graph::Graph;
/// use hopfinder_core::route::{admit_all, solve_unweighted, RouteConstraints};
///
/// let mut graph = Graph::new();
/// graph.register(1, vec![2, 3], ());
/// graph.register(2, vec![1, 4], ());
/// graph.register(3, vec![1, 4], ());
/// graph.register(4, vec![2, 3], ());
///
/// let constraints = RouteConstraints::default().avoid_node(2);
/// let path = solve_unweighted(&graph, 1, 4, constraints.admit(admit_all::<Graph>)).unwrap();
/// assert_eq!(path, vec![1, 3, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConstraints {
    /// Nodes that may never appear on a route (other than as its source).
    pub avoid: BTreeSet<NodeId>,
    /// Directed edges `(from, to)` that may never be traversed.
    pub avoid_edges: BTreeSet<(NodeId, NodeId)>,
}

impl RouteConstraints {
    /// Adds a node to avoid (builder pattern).
    #[must_use]
    pub fn avoid_node(mut self, id: NodeId) -> Self {
        self.avoid.insert(id);
        self
    }

    /// Adds a directed edge to avoid (builder pattern).
    #[must_use]
    pub fn avoid_edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.avoid_edges.insert((from, to));
        self
    }

    /// Returns true when nothing is avoided.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.avoid.is_empty() && self.avoid_edges.is_empty()
    }

    /// Returns true if `id` may appear on a route.
    #[must_use]
    pub fn admits(&self, id: NodeId) -> bool {
        !self.avoid.contains(&id)
    }

    /// Returns true if the edge `from -> to` may be traversed.
    #[must_use]
    pub fn allows_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.admits(to) && !self.avoid_edges.contains(&(from, to))
    }

    /// Wraps an admission predicate so avoided nodes are refused.
    ///
    /// Avoided edges cannot be expressed by a node predicate and are not
    /// applied here; use [`RouteConstraints::guard`] with the weighted solver
    /// for edge-level avoidance.
    pub fn admit<'a, G, F>(&'a self, mut inner: F) -> impl FnMut(&G, NodeId) -> bool + 'a
    where
        G: ?Sized,
        F: FnMut(&G, NodeId) -> bool + 'a,
    {
        move |graph, candidate| self.admits(candidate) && inner(graph, candidate)
    }

    /// Wraps a weight function so avoided nodes and edges are vetoed with
    /// `Error::InvalidEdge`.
    pub fn guard<'a, G, W>(
        &'a self,
        mut inner: W,
    ) -> impl FnMut(&G, Option<NodeId>, NodeId, NodeId) -> Result<Cost> + 'a
    where
        G: ?Sized,
        W: FnMut(&G, Option<NodeId>, NodeId, NodeId) -> Result<Cost> + 'a,
    {
        move |graph, previous, current, candidate| {
            if !self.allows_edge(current, candidate) {
                return Err(Error::InvalidEdge);
            }
            inner(graph, previous, current, candidate)
        }
    }
}
