//! Standard callbacks reproducing plain hop-count routing.

use crate::error::Result;
use crate::graph::NodeId;

use super::Cost;

/// Admission predicate that lets every node through.
///
/// With this predicate [`super::solve_unweighted`] is a plain breadth-first
/// shortest-hop search.
pub fn admit_all<G: ?Sized>(_graph: &G, _candidate: NodeId) -> bool {
    true
}

/// Weight function giving every edge a cost of `1.0`.
///
/// With this function [`super::solve_weighted`] returns routes of the same
/// length as [`super::solve_unweighted`] with [`admit_all`].
pub fn uniform_weight<G: ?Sized>(
    _graph: &G,
    _previous: Option<NodeId>,
    _current: NodeId,
    _candidate: NodeId,
) -> Result<Cost> {
    Ok(1.0)
}
