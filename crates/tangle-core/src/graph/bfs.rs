//! Breadth-first traversal with a cumulative weight metric
//!
//! Expands vertices in FIFO order and sums the weight of every discovery
//! edge (the edge through which a vertex is first reached). The metric is
//! deliberately order-dependent: chains are scanned in reverse insertion
//! order, so it is not a shortest-path distance and must not be read as
//! one.

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::graph::queue::{FifoQueue, VertexQueue};
use crate::graph::store::Graph;
use crate::graph::types::{BfsOptions, BfsOutcome, VertexId, Weight};
use tracing::trace;

/// State tracked during one traversal call
struct BfsState {
    visited: Vec<bool>,
    order: Vec<VertexId>,
    metric: Weight,
    truncated: bool,
    truncation_reason: Option<String>,
}

impl BfsState {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            order: Vec::new(),
            metric: Weight::ZERO,
            truncated: false,
            truncation_reason: None,
        }
    }

    fn check_limit(&mut self, opts: &BfsOptions) -> bool {
        if let Some(max) = opts.max_visited {
            if self.order.len() >= max {
                self.truncated = true;
                self.truncation_reason = Some("max_visited".to_string());
                return false;
            }
        }
        true
    }
}

/// Traverse breadth-first from `start` using the crate's own FIFO queue
/// and default options.
pub fn bfs_traverse<P>(graph: &Graph<P>, start: VertexId) -> Result<BfsOutcome> {
    let mut queue = VertexQueue::with_capacity(graph.vertex_count());
    bfs_traverse_with(graph, start, &BfsOptions::default(), &mut queue)
}

/// Traverse breadth-first from `start` with explicit options and a
/// caller-supplied FIFO queue.
///
/// Visits every vertex reachable from `start` (unless `opts.max_visited`
/// truncates the expansion) and accumulates the weight of each discovery
/// edge. An out-of-range `start` fails with `InvalidVertex` before any
/// state is built.
#[tracing::instrument(skip(graph, opts, queue), fields(vertex_count = graph.vertex_count()))]
pub fn bfs_traverse_with<P, Q: FifoQueue<VertexId>>(
    graph: &Graph<P>,
    start: VertexId,
    opts: &BfsOptions,
    queue: &mut Q,
) -> Result<BfsOutcome> {
    graph.check_vertex(start)?;

    let mut state = BfsState::new(graph.vertex_count());
    state.visited[start] = true;
    state.order.push(start);
    queue.enqueue(start);

    'expand: while let Some(current) = queue.dequeue() {
        trace!(current, metric = state.metric.value(), "expanding vertex");

        for node in graph.chain_of(current).iter() {
            if state.visited[node.neighbor] {
                continue;
            }
            if !state.check_limit(opts) {
                break 'expand;
            }

            state.visited[node.neighbor] = true;
            state.metric += node.weight;
            state.order.push(node.neighbor);
            queue.enqueue(node.neighbor);
        }
    }

    trace!(
        metric = state.metric.value(),
        visited = state.order.len(),
        truncated = state.truncated,
        "traversal complete"
    );

    Ok(BfsOutcome {
        start,
        metric: state.metric,
        visited: state.visited,
        order: state.order,
        truncated: state.truncated,
        truncation_reason: state.truncation_reason,
    })
}
