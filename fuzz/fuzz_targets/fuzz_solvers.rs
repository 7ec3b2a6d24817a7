//! Fuzz target for both route solvers.
//!
//! Builds a small graph from arbitrary adjacency lists and routes through it
//! with arbitrary weights and vetoes, checking that:
//! - neither solver panics
//! - every returned path starts at the source, ends at the target and only
//!   follows registered edges
//! - the only error without a failing callback is `NoPathFound`
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_solvers
//! ```

#![no_main]

use arbitrary::Arbitrary;
use hopfinder_core::{solve_unweighted, solve_weighted, Error, Graph, NodeId};
use libfuzzer_sys::fuzz_target;

/// Fuzzing input for the solvers.
#[derive(Arbitrary, Debug)]
struct RouteInput {
    /// Adjacency list per node, node IDs are list positions.
    adjacency: Vec<Vec<u8>>,
    from: u8,
    to: u8,
    /// Nodes refused by the admission predicate.
    refused: Vec<u8>,
    /// Per-edge weights, indexed by `(current + candidate) % len`.
    weights: Vec<u16>,
}

fn follows_edges(graph: &Graph, path: &[NodeId], from: NodeId, to: NodeId) -> bool {
    path.first() == Some(&from)
        && path.last() == Some(&to)
        && path.windows(2).all(|pair| {
            graph
                .get_node(pair[0])
                .is_some_and(|node| node.connections().contains(&pair[1]))
        })
}

fuzz_target!(|input: RouteInput| {
    // Limit graph size to keep iterations fast
    let mut graph = Graph::new();
    for (id, connections) in (0u64..).zip(input.adjacency.iter().take(64)) {
        let connections: Vec<NodeId> = connections.iter().take(8).map(|&c| NodeId::from(c)).collect();
        graph.register(id, connections, ());
    }
    let (from, to) = (NodeId::from(input.from), NodeId::from(input.to));

    let refused: Vec<NodeId> = input.refused.iter().map(|&id| NodeId::from(id)).collect();
    match solve_unweighted(&graph, from, to, |_: &Graph, id| !refused.contains(&id)) {
        Ok(path) => assert!(follows_edges(&graph, &path, from, to)),
        Err(err) => assert!(err.is_no_path(), "unexpected error: {err}"),
    }

    let weights = input.weights;
    let result = solve_weighted(&graph, from, to, |_: &Graph, _, current, candidate| {
        if weights.is_empty() {
            return Ok(1.0);
        }
        let slot = usize::try_from(current.wrapping_add(candidate)).unwrap_or(0) % weights.len();
        match weights[slot] {
            // Reserve zero as the veto marker
            0 => Err(Error::InvalidEdge),
            w => Ok(f64::from(w)),
        }
    });
    match result {
        Ok(path) => assert!(follows_edges(&graph, &path, from, to)),
        Err(err) => assert!(err.is_no_path(), "unexpected error: {err}"),
    }
});
