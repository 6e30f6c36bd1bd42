//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that the strict (`try_*`) graph operations can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex index outside `[0, vertex_count)` of a directed graph.
    #[error("Vertex index {0} is out of range")]
    InvalidVertex(usize),

    /// Label not present in an undirected graph.
    #[error("Vertex {0} not found")]
    UnknownVertex(String),

    /// Self-loop not allowed.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(String),

    /// Edge weight below zero.
    #[error("Edge weight must not be negative: {0}")]
    NegativeWeight(i64),

    /// No edge between the two vertices.
    #[error("No edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
