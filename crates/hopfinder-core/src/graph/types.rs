//! Node type for route graphs.

use serde::{Deserialize, Serialize};

/// Identifier of a node, unique within one graph.
pub type NodeId = u64;

/// A node of a route graph.
///
/// Holds the ordered adjacency list and an opaque payload owned by the
/// caller. Solvers never read the payload; it is only reachable by callbacks
/// through the graph they receive.
///
/// The serialized form is a flat record: `id`, `connections`, and the
/// payload's own fields side by side.
///
/// # Example
///
/// ```rust
/// use hopfinder_core::graph::Node;
///
/// let node = Node::new(30002187, vec![30002188, 30002189], "Amarr");
///
/// assert_eq!(node.id(), 30002187);
/// assert_eq!(node.connections(), &[30002188, 30002189]);
/// assert_eq!(*node.payload(), "Amarr");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node<P = ()> {
    id: NodeId,
    #[serde(default)]
    connections: Vec<NodeId>,
    #[serde(flatten)]
    payload: P,
}

impl<P> Node<P> {
    /// Creates a node with the given adjacency list and payload.
    #[must_use]
    pub fn new(id: NodeId, connections: Vec<NodeId>, payload: P) -> Self {
        Self {
            id,
            connections,
            payload,
        }
    }

    /// Returns the node ID.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the ordered neighbor IDs.
    #[must_use]
    pub fn connections(&self) -> &[NodeId] {
        &self.connections
    }

    /// Returns the caller payload.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consumes the node and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }
}
