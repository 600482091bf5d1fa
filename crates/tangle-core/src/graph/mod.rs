//! Weighted undirected graph and its traversal engine
//!
//! Provides the adjacency-chain graph store and the algorithms over it:
//! - arena-backed adjacency chains holding reciprocal edge entries
//! - BFS traversal accumulating a discovery-edge weight metric
//! - FIFO queue trait for pluggable pending-work lists

pub mod bfs;
pub(crate) mod chain;
pub mod queue;
pub mod store;
pub mod types;

pub use bfs::{bfs_traverse, bfs_traverse_with};
pub use queue::{FifoQueue, VertexQueue};
pub use store::Graph;
pub use types::{BfsOptions, BfsOutcome, EdgeRef, VertexId, Weight};
