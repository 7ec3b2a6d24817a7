//! Route result and parent-link path reconstruction.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::graph::NodeId;

use super::Cost;

/// A route found by one of the solvers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Node IDs from source to target, both inclusive.
    pub nodes: Vec<NodeId>,
    /// Hop count (unweighted solver) or accumulated weight (weighted solver).
    pub cost: Cost,
}

impl Route {
    /// Number of edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consumes the route, keeping only the node sequence.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

/// Parent link recorded per visited node; `None` marks the source.
pub(crate) type ParentLinks = FxHashMap<NodeId, Option<NodeId>>;

/// Walks parent links back from `to` until `from` is reached.
///
/// Returns `None` when the chain breaks or does not reach `from` within
/// `links.len()` steps, so a cyclic or truncated chain can never produce a
/// malformed path.
pub(crate) fn walk_back(links: &ParentLinks, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
    let mut path = vec![to];
    let mut walk = to;
    while walk != from {
        if path.len() > links.len() {
            return None;
        }
        walk = (*links.get(&walk)?)?;
        path.push(walk);
    }
    path.reverse();
    Some(path)
}
