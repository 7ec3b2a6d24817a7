//! Route solvers over an [`Adjacency`](crate::graph::Adjacency) graph.
//!
//! Two self-contained solvers share the same path and error vocabulary:
//!
//! - [`solve_unweighted`]: breadth-first, minimal hop count, with a node
//!   admission predicate.
//! - [`solve_weighted`]: label-correcting relaxation driven by an edge weight
//!   function that may veto edges with [`Error::InvalidEdge`](crate::Error::InvalidEdge).
//!
//! Both take a read-only borrow of the graph and run to completion on the
//! calling thread.

mod callbacks;
mod constraints;
mod path;
mod unweighted;
mod weighted;

#[cfg(test)]
mod constraints_tests;
#[cfg(test)]
mod path_tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use callbacks::{admit_all, uniform_weight};
pub use constraints::RouteConstraints;
pub use path::Route;
pub use unweighted::{solve_unweighted, unweighted_route};
pub use weighted::{solve_weighted, weighted_route, OPEN_BOUND};

/// Cost of an edge or of a whole route.
pub type Cost = f64;

/// Solver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first hop count ([`solve_unweighted`]).
    #[default]
    Fast,
    /// Weight-driven relaxation ([`solve_weighted`]).
    Weighted,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => f.write_str("fast"),
            Self::Weighted => f.write_str("weighted"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" | "unweighted" | "bfs" => Ok(Self::Fast),
            "weighted" => Ok(Self::Weighted),
            other => Err(format!(
                "unknown algorithm '{}' (expected: fast, weighted)",
                other
            )),
        }
    }
}
