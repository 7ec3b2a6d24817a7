//! In-memory graph store keyed by node ID.

use rustc_hash::FxHashMap;

use super::types::{Node, NodeId};

/// Storage for route graph nodes, keyed by ID.
///
/// Provides O(1) access to nodes by ID. Registering an ID twice replaces
/// the previous node; there is no merge. Adjacency lists may reference IDs
/// that are not registered, and every lookup tolerates that.
#[derive(Debug, Clone)]
pub struct Graph<P = ()> {
    nodes: FxHashMap<NodeId, Node<P>>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self {
            nodes: FxHashMap::default(),
        }
    }
}

impl<P> Graph<P> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(capacity_hint, Default::default()),
        }
    }

    /// Inserts or replaces the node at `id`.
    ///
    /// Returns the node previously registered under `id`, if any.
    pub fn register(
        &mut self,
        id: NodeId,
        connections: impl Into<Vec<NodeId>>,
        payload: P,
    ) -> Option<Node<P>> {
        self.insert(Node::new(id, connections.into(), payload))
    }

    /// Inserts or replaces a prebuilt node.
    pub fn insert(&mut self, node: Node<P>) -> Option<Node<P>> {
        self.nodes.insert(node.id(), node)
    }

    /// Gets a node by ID.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(&id)
    }

    /// Gets the payload of a node by ID.
    #[must_use]
    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.nodes.get(&id).map(Node::payload)
    }

    /// Returns true if a node with the given ID exists.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns how many nodes fit before the store reallocates.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the total number of adjacency entries across all nodes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.connections().len()).sum()
    }

    /// Returns true if no node is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns all node IDs, sorted.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterates over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<P>> {
        self.nodes.values()
    }

    /// Returns every `(from, to)` adjacency entry whose `to` is not registered.
    ///
    /// Sorted by `from`, then by position in the adjacency list.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(NodeId, NodeId)> {
        let mut dangling: Vec<(NodeId, NodeId)> = Vec::new();
        for id in self.node_ids() {
            if let Some(node) = self.nodes.get(&id) {
                dangling.extend(
                    node.connections()
                        .iter()
                        .filter(|to| !self.nodes.contains_key(to))
                        .map(|&to| (id, to)),
                );
            }
        }
        dangling
    }
}

impl<P> FromIterator<Node<P>> for Graph<P> {
    fn from_iter<I: IntoIterator<Item = Node<P>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut graph = Self::with_capacity(iter.size_hint().0);
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}

impl<P> Extend<Node<P>> for Graph<P> {
    fn extend<I: IntoIterator<Item = Node<P>>>(&mut self, iter: I) {
        for node in iter {
            self.insert(node);
        }
    }
}
