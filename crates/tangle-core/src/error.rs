//! Error types for tangle graph operations
//!
//! Every fallible operation returns a typed result; vertex ids supplied by
//! callers are never trusted to be in range, and allocation for edge
//! insertion is fallible so a failed insertion cannot leave a half-built
//! edge behind.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// Graph construction was asked for zero vertices
    #[error("invalid vertex count: a graph needs at least one vertex")]
    InvalidArgument,

    /// A caller-supplied vertex id is outside `[0, vertex_count)`
    #[error("invalid vertex {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex {
        vertex: usize,
        vertex_count: usize,
    },

    /// Edge removal found no matching entry on either adjacency chain
    #[error("no edge between {src} and {dst}")]
    EdgeNotFound { src: usize, dst: usize },

    /// Reservation failed while growing an adjacency arena
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result type alias for tangle operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_vertex_message_names_both_ids() {
        let err = GraphError::InvalidVertex {
            vertex: 9,
            vertex_count: 4,
        };
        assert_eq!(err.to_string(), "invalid vertex 9 (graph has 4 vertices)");
    }

    #[test]
    fn edge_not_found_message() {
        let err = GraphError::EdgeNotFound { src: 1, dst: 2 };
        assert_eq!(err.to_string(), "no edge between 1 and 2");
    }
}
