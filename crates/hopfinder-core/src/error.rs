//! Error types for hopfinder-core.

use thiserror::Error;

use crate::graph::NodeId;
use crate::route::Cost;

/// Routing error types.
#[derive(Error, Debug)]
pub enum Error {
    /// No sequence of admitted nodes or accepted edges connects the endpoints.
    #[error("No valid path found from {from} to {to}")]
    NoPathFound {
        /// Source node.
        from: NodeId,
        /// Target node.
        to: NodeId,
    },

    /// Returned by a weight function to veto one edge in one traversal context.
    ///
    /// The weighted solver consumes this variant; it never reaches the caller.
    #[error("Invalid edge")]
    InvalidEdge,

    /// A weight function produced a cost the solver cannot accumulate
    /// (negative, NaN, infinite or at the `f64::MAX` sentinel).
    #[error("Cost {cost} for edge {from} -> {to} is out of range")]
    CostOutOfRange {
        /// Node being expanded.
        from: NodeId,
        /// Candidate node.
        to: NodeId,
        /// Offending cost.
        cost: Cost,
    },

    /// Accumulated cost reached the `f64::MAX` sentinel.
    #[error("Accumulated cost {cost} overflowed at node {node}")]
    CostOverflow {
        /// Node whose cost overflowed.
        node: NodeId,
        /// Accumulated cost.
        cost: Cost,
    },

    /// Error raised by a caller-supplied callback, propagated verbatim.
    #[error("Callback error: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an arbitrary caller error so a callback can abort a solve.
    pub fn callback<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Callback(err.into())
    }

    /// Returns true for the expected "no route" outcome.
    #[must_use]
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

/// Result type alias for routing operations.
pub type Result<T> = std::result::Result<T, Error>;
