//! Tangle Core Library
//!
//! Weighted undirected graph with vertex-indexed adjacency chains and a
//! breadth-first traversal that accumulates a discovery-edge weight metric.

pub mod error;
pub mod graph;
pub mod logging;
