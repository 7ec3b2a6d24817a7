//! Weighted solver: FIFO label-correcting relaxation with vetoable edges.
//!
//! Costs come from a caller weight function instead of hop counts, so the
//! solver has to settle more nodes before it can trust a result. In exchange
//! it can route around nodes that are merely undesirable rather than
//! forbidden, which the unweighted solver cannot express.
//!
//! This is not a priority-queue Dijkstra: nodes are expanded in FIFO order
//! and re-enqueued whenever their best-known cost improves. With
//! non-negative weights on a finite graph the costs converge to the true
//! minimum.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::graph::{Adjacency, NodeId};

use super::path::Route;
use super::Cost;

/// Upper bound sentinel meaning "no route to the target known yet".
///
/// Weight functions must never produce it; costs at or beyond it are
/// rejected with `Error::CostOutOfRange` / `Error::CostOverflow`.
pub const OPEN_BOUND: Cost = Cost::MAX;

/// Finds a minimum-cost path from `from` to `to`.
///
/// `weight(graph, previous, current, candidate)` prices the edge
/// `current -> candidate`, where `previous` is the hop before `current`
/// (`None` when `current` is the source), so costs may depend on the two
/// preceding hops.
///
/// - `Err(Error::InvalidEdge)` skips that edge in that context only; the
///   same candidate may still be reached through another `previous`.
/// - Any other error aborts the solve and is returned unchanged.
/// - Costs must be finite, non-negative and below [`OPEN_BOUND`].
///
/// # Errors
///
/// `Error::NoPathFound` when no accepted edge sequence reaches `to`,
/// `Error::CostOutOfRange` / `Error::CostOverflow` on invalid costs, or the
/// weight function's own error.
///
/// # Example
///
/// ```rust
/// use hopfinder_core::graph::Graph;
/// use hopfinder_core::route::{solve_weighted, uniform_weight};
/// use hopfinder_core::Error;
///
/// let mut graph = Graph::new();
/// graph.register(1, vec![2, 4], ());
/// graph.register(2, vec![1, 3], ());
/// graph.register(3, vec![2, 4], ());
/// graph.register(4, vec![3, 1], ());
///
/// assert_eq!(solve_weighted(&graph, 1, 4, uniform_weight).unwrap(), vec![1, 4]);
///
/// // Veto the direct jump: the long way round is the only route left.
/// let path = solve_weighted(&graph, 1, 4, |_: &Graph, _, current, candidate| {
///     if (current, candidate) == (1, 4) {
///         return Err(Error::InvalidEdge);
///     }
///     Ok(1.0)
/// })
/// .unwrap();
/// assert_eq!(path, vec![1, 2, 3, 4]);
/// ```
pub fn solve_weighted<G, W>(graph: &G, from: NodeId, to: NodeId, weight: W) -> Result<Vec<NodeId>>
where
    G: Adjacency + ?Sized,
    W: FnMut(&G, Option<NodeId>, NodeId, NodeId) -> Result<Cost>,
{
    weighted_route(graph, from, to, weight).map(Route::into_nodes)
}

/// Same as [`solve_weighted`], also reporting the accumulated cost.
pub fn weighted_route<G, W>(graph: &G, from: NodeId, to: NodeId, weight: W) -> Result<Route>
where
    G: Adjacency + ?Sized,
    W: FnMut(&G, Option<NodeId>, NodeId, NodeId) -> Result<Cost>,
{
    if from == to {
        return Ok(Route {
            nodes: vec![from],
            cost: 0.0,
        });
    }

    let mut state = RelaxState::new(from);
    state.relax(graph, to, weight)?;

    let Some(&label) = state.best.get(&to) else {
        tracing::debug!(from, to, expansions = state.expansions, "No weighted route");
        return Err(Error::NoPathFound { from, to });
    };

    let cost = state.labels[label].cost;
    let nodes = state.trace(label);
    tracing::debug!(
        from,
        to,
        cost,
        hops = nodes.len() - 1,
        expansions = state.expansions,
        "Weighted route found"
    );
    Ok(Route { nodes, cost })
}

/// One arrival at a node: the cost and context it was reached with.
///
/// Labels are never modified once pushed, so following `parent` from any
/// label replays exactly the steps the weight function priced.
#[derive(Debug, Clone, Copy)]
struct Label {
    node: NodeId,
    cost: Cost,
    /// Index of the label this one was relaxed from; `None` for the source.
    parent: Option<usize>,
}

/// Bookkeeping for one relaxation run.
struct RelaxState {
    /// Every arrival recorded so far; parents always precede children.
    labels: Vec<Label>,
    /// Label holding each node's best cost; costs only ever decrease.
    best: FxHashMap<NodeId, usize>,
    /// FIFO of label indices waiting for expansion.
    queue: VecDeque<usize>,
    /// Best complete cost to the target; prunes anything above it.
    top: Cost,
    expansions: usize,
}

impl RelaxState {
    fn new(from: NodeId) -> Self {
        let mut best = FxHashMap::default();
        best.insert(from, 0);
        Self {
            labels: vec![Label {
                node: from,
                cost: 0.0,
                parent: None,
            }],
            best,
            queue: VecDeque::from([0]),
            top: OPEN_BOUND,
            expansions: 0,
        }
    }

    fn relax<G, W>(&mut self, graph: &G, to: NodeId, mut weight: W) -> Result<()>
    where
        G: Adjacency + ?Sized,
        W: FnMut(&G, Option<NodeId>, NodeId, NodeId) -> Result<Cost>,
    {
        while let Some(index) = self.queue.pop_front() {
            let Label {
                node: current,
                cost: base,
                parent,
            } = self.labels[index];

            // Superseded by a cheaper arrival, which is queued behind it.
            if self.best.get(&current) != Some(&index) {
                continue;
            }
            self.expansions += 1;
            let previous = parent.map(|p| self.labels[p].node);

            for &candidate in graph.connections(current) {
                let local = match weight(graph, previous, current, candidate) {
                    Ok(cost) => cost,
                    Err(Error::InvalidEdge) => continue,
                    Err(err) => return Err(err),
                };
                if !(0.0..OPEN_BOUND).contains(&local) {
                    return Err(Error::CostOutOfRange {
                        from: current,
                        to: candidate,
                        cost: local,
                    });
                }

                let cost = base + local;
                if cost >= OPEN_BOUND {
                    return Err(Error::CostOverflow {
                        node: candidate,
                        cost,
                    });
                }

                // Cannot beat the best complete route already found.
                if cost > self.top {
                    continue;
                }

                let improves = self
                    .best
                    .get(&candidate)
                    .is_none_or(|&known| cost < self.labels[known].cost);
                if !improves {
                    continue;
                }

                tracing::trace!(current, candidate, cost, "Relaxed edge");
                let label = self.labels.len();
                self.labels.push(Label {
                    node: candidate,
                    cost,
                    parent: Some(index),
                });
                self.best.insert(candidate, label);

                if candidate == to {
                    // Destination: tighten the bound, never expand it.
                    self.top = cost;
                    continue;
                }

                self.queue.push_back(label);
            }
        }
        Ok(())
    }

    /// Node sequence from the source to `label`'s node.
    fn trace(&self, label: usize) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        let mut cursor = Some(label);
        while let Some(index) = cursor {
            let step = self.labels[index];
            nodes.push(step.node);
            cursor = step.parent;
        }
        nodes.reverse();
        nodes
    }
}
