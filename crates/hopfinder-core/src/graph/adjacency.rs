//! Read-only adjacency access shared by both solvers.

use super::types::NodeId;

/// Trait for adjacency lookup — any graph store can implement this.
///
/// Unknown IDs must yield an empty slice, never panic: adjacency lists may
/// reference nodes that were never registered.
pub trait Adjacency {
    /// Returns the ordered neighbor IDs of `node_id`.
    fn connections(&self, node_id: NodeId) -> &[NodeId];
}

/// Implement `Adjacency` for `Graph`.
impl<P> Adjacency for super::Graph<P> {
    fn connections(&self, node_id: NodeId) -> &[NodeId] {
        self.get_node(node_id)
            .map_or(&[][..], |node| node.connections())
    }
}
