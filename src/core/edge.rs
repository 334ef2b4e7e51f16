use std::fmt;

/// Identifier of a vertex. Valid ids of a graph are `0..vertex_count`.
pub type VertexId = usize;

/// Cost (weight) carried by an edge.
pub type Cost = i64;

/// A directed connection from `from` to `to` carrying `cost`.
///
/// This is a plain value used for transferring edges between the scanners,
/// the loader and the storages. An undirected graph stores it together with
/// its mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub cost: Cost,
}

impl Edge {
    /// Endpoint value of a [default](Edge::default) edge. It is out of range
    /// for every graph, so inserting a default edge is a no-op.
    pub const NO_VERTEX: VertexId = VertexId::MAX;

    pub fn new(from: VertexId, to: VertexId, cost: Cost) -> Self {
        Self { from, to, cost }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns the same edge in the opposite direction.
    #[must_use]
    pub fn mirror(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            cost: self.cost,
        }
    }
}

impl Default for Edge {
    fn default() -> Self {
        Self {
            from: Self::NO_VERTEX,
            to: Self::NO_VERTEX,
            cost: 0,
        }
    }
}

impl From<(VertexId, VertexId, Cost)> for Edge {
    fn from((from, to, cost): (VertexId, VertexId, Cost)) -> Self {
        Self::new(from, to, cost)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{},{}", self.from, self.to, self.cost)
    }
}
