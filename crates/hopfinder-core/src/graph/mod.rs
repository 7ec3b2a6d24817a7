//! In-memory route graph (nodes, adjacency, loading).
//!
//! The store holds nothing but nodes keyed by ID; all algorithmic work lives
//! in [`crate::route`]. Solvers only see a graph through [`Adjacency`].
//!
//! # Example
//!
//! ```rust
//! use hopfinder_core::graph::{Adjacency, Graph};
//!
//! let mut graph: Graph<&str> = Graph::with_capacity(3);
//! graph.register(1, vec![2], "Amarr");
//! graph.register(2, vec![1, 3], "Sarum Prime");
//!
//! assert_eq!(graph.connections(2), &[1, 3]);
//! // Node 3 was never registered: empty adjacency, no panic.
//! assert!(graph.connections(3).is_empty());
//! ```

mod adjacency;
pub mod loader;
mod store;
mod types;

#[cfg(test)]
mod loader_tests;

pub use adjacency::Adjacency;
pub use store::Graph;
pub use types::{Node, NodeId};
