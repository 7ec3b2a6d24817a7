//! # Hopfinder Core
//!
//! Shortest-route search over a static, in-memory graph of integer-identified
//! nodes.
//!
//! ## Features
//!
//! - **Graph store**: nodes keyed by `u64`, each with an ordered adjacency
//!   list and a caller-defined payload
//! - **Fast solver**: breadth-first minimal hop count with a node admission
//!   predicate
//! - **Weighted solver**: label-correcting relaxation with a weight function
//!   that can price or veto individual edges
//! - **Constraints**: avoid nodes and directed edges without rewriting callbacks
//! - **JSON loader** and layered **configuration** for front-ends
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfinder_core::{solve_unweighted, solve_weighted, Error, Graph};
//!
//! let mut graph: Graph<f64> = Graph::with_capacity(4);
//! graph.register(1, vec![2, 4], 1.0);
//! graph.register(2, vec![1, 3], 0.9);
//! graph.register(3, vec![2, 4], 0.8);
//! graph.register(4, vec![3, 1], 0.1);
//!
//! // Fewest hops, refusing low-security nodes.
//! let admit = |g: &Graph<f64>, id| g.payload(id).is_some_and(|&sec| sec >= 0.5);
//! assert!(solve_unweighted(&graph, 1, 4, admit).unwrap_err().is_no_path());
//! assert_eq!(solve_unweighted(&graph, 1, 3, admit).unwrap(), vec![1, 2, 3]);
//!
//! // Cheapest route, with the direct jump vetoed.
//! let path = solve_weighted(&graph, 1, 4, |_: &Graph<f64>, _, current, candidate| {
//!     if (current, candidate) == (1, 4) {
//!         return Err(Error::InvalidEdge);
//!     }
//!     Ok(1.0)
//! })
//! .unwrap();
//! assert_eq!(path, vec![1, 2, 3, 4]);
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::manual_assert
    )
)]

pub mod config;
pub mod error;
pub mod graph;
pub mod route;

pub use config::HopfinderConfig;
pub use error::{Error, Result};
pub use graph::{Adjacency, Graph, Node, NodeId};
pub use route::{
    admit_all, solve_unweighted, solve_weighted, uniform_weight, unweighted_route,
    weighted_route, Algorithm, Cost, Route, RouteConstraints,
};
