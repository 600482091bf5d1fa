//! Graph store: vertex-indexed adjacency chains with reciprocal edges

use crate::error::{GraphError, Result};
use crate::graph::chain::EdgeChain;
use crate::graph::types::{EdgeRef, VertexId, Weight};
use std::fmt;
use tracing::{debug, warn};

/// Weighted undirected graph over a fixed set of dense vertex ids.
///
/// One logical edge is stored as two reciprocal entries, one on each
/// endpoint's adjacency chain, each carrying its own payload. The payload
/// type is generic; payloads are moved into the graph on insertion and
/// dropped when their entry is unlinked or the graph is dropped.
///
/// Mutation takes `&mut self` and traversal takes `&self`, so exclusive
/// writers and concurrent readers are enforced at compile time.
#[derive(Debug)]
pub struct Graph<P> {
    vertex_count: usize,
    adjacency: Vec<EdgeChain<P>>,
}

impl<P> Graph<P> {
    /// Create a graph with `vertex_count` empty adjacency chains.
    /// The vertex count is fixed for the life of the graph.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidArgument);
        }

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.extend((0..vertex_count).map(|_| EdgeChain::new()));

        debug!(vertex_count, "graph created");
        Ok(Graph {
            vertex_count,
            adjacency,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of adjacency entries across all chains. A consistent graph
    /// holds twice as many entries as logical undirected edges.
    pub fn entry_count(&self) -> usize {
        self.adjacency.iter().map(EdgeChain::len).sum()
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.vertex_count {
            return Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    pub(crate) fn chain_of(&self, vertex: VertexId) -> &EdgeChain<P> {
        &self.adjacency[vertex]
    }

    /// Insert an undirected edge between `src` and `dst`.
    ///
    /// `adjacency[src]` gains a head entry for `dst` carrying `dst_payload`
    /// and `adjacency[dst]` gains a head entry for `src` carrying
    /// `src_payload`; both carry `weight`. Room for both entries is
    /// reserved before either chain is touched, so an allocation failure
    /// leaves the graph in its prior state with no half-inserted edge.
    pub fn add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        weight: Weight,
        src_payload: P,
        dst_payload: P,
    ) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        if src == dst {
            self.adjacency[src].reserve_slots(2)?;
        } else {
            self.adjacency[src].reserve_slots(1)?;
            self.adjacency[dst].reserve_slots(1)?;
        }

        self.adjacency[src].push_front(dst, weight, dst_payload);
        self.adjacency[dst].push_front(src, weight, src_payload);

        debug!(src, dst, weight = weight.value(), "edge added");
        Ok(())
    }

    /// Remove the undirected edge between `src` and `dst`, unlinking the
    /// first matching entry on each side.
    ///
    /// A graph that has gone inconsistent (an entry on one side only)
    /// still removes the side it finds and reports success; `EdgeNotFound`
    /// means neither chain had a matching entry.
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let removed_src = self.adjacency[src].unlink(dst).is_some();
        let removed_dst = self.adjacency[dst].unlink(src).is_some();

        match (removed_src, removed_dst) {
            (true, true) => {
                debug!(src, dst, "edge removed");
                Ok(())
            }
            (true, false) | (false, true) => {
                warn!(src, dst, "removed one-sided edge from inconsistent graph");
                Ok(())
            }
            (false, false) => Err(GraphError::EdgeNotFound { src, dst }),
        }
    }

    /// Whether `adjacency[src]` holds an entry for `dst`
    pub fn contains_edge(&self, src: VertexId, dst: VertexId) -> Result<bool> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        Ok(self.adjacency[src].contains(dst))
    }

    /// Iterate one vertex's adjacency chain in chain order (reverse
    /// insertion order)
    pub fn neighbors(&self, vertex: VertexId) -> Result<impl Iterator<Item = EdgeRef<'_, P>>> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].iter().map(move |node| EdgeRef {
            vertex,
            neighbor: node.neighbor,
            weight: node.weight,
            payload: &node.payload,
        }))
    }

    /// Enumerate every adjacency entry in vertex-id order, then chain
    /// order. Lazy, restartable, and read-only.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, P>> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(vertex, chain)| {
                chain.iter().map(move |node| EdgeRef {
                    vertex,
                    neighbor: node.neighbor,
                    weight: node.weight,
                    payload: &node.payload,
                })
            })
    }
}

impl<P: fmt::Debug> fmt::Display for Graph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, chain) in self.adjacency.iter().enumerate() {
            write!(f, "vertex {vertex}:")?;
            for node in chain.iter() {
                write!(
                    f,
                    " {} (w={}, {:?}) ->",
                    node.neighbor,
                    node.weight.value(),
                    node.payload
                )?;
            }
            writeln!(f, " .")?;
        }
        Ok(())
    }
}
