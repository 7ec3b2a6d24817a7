//! Breadth-first solver with a node-admission predicate.
//!
//! Counts hops to the target while letting the caller refuse nodes. Unlike
//! the weighted solver it cannot prioritise nodes, only accept or refuse
//! them, so heavy filtering makes it more likely to find no route at all.

use std::collections::hash_map::Entry;
use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::{Adjacency, NodeId};

use super::path::{walk_back, ParentLinks, Route};
use super::Cost;

/// Finds a minimal-hop path from `from` to `to`.
///
/// `admit(graph, candidate)` is called exactly once per node, the first
/// time it is discovered. A refused node is still marked as visited, so it
/// is never evaluated again and nothing reachable only through it is
/// explored. The source itself is never passed to `admit`.
///
/// The returned path has minimal hop count among all paths made only of
/// admitted nodes, provided `admit` is a pure function of `(graph, id)`.
///
/// # Errors
///
/// Returns `Error::NoPathFound` when the target is never reached.
///
/// # Example
///
/// ```rust
/// use hopfinder_core::graph::Graph;
/// use hopfinder_core::route::{admit_all, solve_unweighted};
///
/// let mut graph = Graph::new();
/// graph.register(1, vec![2, 4], ());
/// graph.register(2, vec![1, 3], ());
/// graph.register(3, vec![2, 4], ());
/// graph.register(4, vec![3, 1], ());
///
/// assert_eq!(solve_unweighted(&graph, 1, 3, admit_all).unwrap().len(), 3);
///
/// // Refuse node 4: the route has to go through 2.
/// let path = solve_unweighted(&graph, 1, 3, |_: &Graph, id| id != 4).unwrap();
/// assert_eq!(path, vec![1, 2, 3]);
/// ```
pub fn solve_unweighted<G, F>(graph: &G, from: NodeId, to: NodeId, admit: F) -> Result<Vec<NodeId>>
where
    G: Adjacency + ?Sized,
    F: FnMut(&G, NodeId) -> bool,
{
    unweighted_route(graph, from, to, admit).map(Route::into_nodes)
}

/// Same as [`solve_unweighted`], also reporting the hop count as the cost.
pub fn unweighted_route<G, F>(graph: &G, from: NodeId, to: NodeId, mut admit: F) -> Result<Route>
where
    G: Adjacency + ?Sized,
    F: FnMut(&G, NodeId) -> bool,
{
    let mut links = ParentLinks::default();
    let mut queue = VecDeque::new();
    let mut expanded = 0usize;
    let mut reached = false;

    links.insert(from, None);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        // Stop as soon as the target is dequeued, the rest of the queue is irrelevant.
        if current == to {
            reached = true;
            break;
        }
        expanded += 1;

        for &candidate in graph.connections(current) {
            if let Entry::Vacant(slot) = links.entry(candidate) {
                // Visited even when refused: admit runs once per node.
                slot.insert(Some(current));
                if admit(graph, candidate) {
                    queue.push_back(candidate);
                }
            }
        }
    }

    if !reached {
        tracing::debug!(from, to, expanded, "No unweighted route");
        return Err(Error::NoPathFound { from, to });
    }

    let Some(nodes) = walk_back(&links, from, to) else {
        tracing::warn!(from, to, "Unweighted route could not be reconstructed");
        return Err(Error::NoPathFound { from, to });
    };

    let hops = nodes.len() - 1;
    tracing::debug!(from, to, hops, expanded, "Unweighted route found");
    Ok(Route {
        nodes,
        cost: hop_cost(hops),
    })
}

// Reason: hop counts are bounded by node count, far below f64's 2^53 exact range.
#[allow(clippy::cast_precision_loss)]
fn hop_cost(hops: usize) -> Cost {
    hops as Cost
}
