use serde::Serialize;

/// Dense vertex identifier, an index into the adjacency table
pub type VertexId = usize;

/// Weight carried by one edge.
/// Signed so callers are free to model penalties; the graph itself does not
/// enforce non-negativity and places no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Weight(i64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub fn new(value: i64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Weight {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl From<i64> for Weight {
    fn from(value: i64) -> Self {
        Weight(value)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One adjacency entry seen while enumerating a graph: the owning vertex,
/// the far endpoint, the edge weight, and the payload stored on this side.
#[derive(Debug)]
pub struct EdgeRef<'a, P> {
    pub vertex: VertexId,
    pub neighbor: VertexId,
    pub weight: Weight,
    pub payload: &'a P,
}

impl<P> Clone for EdgeRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for EdgeRef<'_, P> {}

/// Options for breadth-first traversal
#[derive(Debug, Clone, Default)]
pub struct BfsOptions {
    /// Maximum vertices to visit (None = every vertex reachable from the
    /// start)
    pub max_visited: Option<usize>,
}

/// Complete traversal result
#[derive(Debug, Clone, Serialize)]
pub struct BfsOutcome {
    pub start: VertexId,
    /// Sum of discovery-edge weights in FIFO/chain order. Not a
    /// shortest-path distance; reordering edge insertions can change it.
    pub metric: Weight,
    /// Reachability bitmap, indexed by vertex id
    pub visited: Vec<bool>,
    /// Vertices in the order they were first discovered
    pub order: Vec<VertexId>,
    pub truncated: bool,
    pub truncation_reason: Option<String>,
}

impl BfsOutcome {
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    /// Visited vertex ids in ascending id order
    pub fn visited_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, seen)| **seen)
            .map(|(vertex, _)| vertex)
    }
}
