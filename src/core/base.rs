use super::{
    edge::{Cost, Edge, VertexId},
    error::{InsertEdgeError, RemoveEdgeError},
    marker::EdgeType,
};

/// Read-only capabilities shared by all graph storages.
///
/// The algorithms in this crate are written against this trait and therefore
/// work with any storage. None of the methods panic on a vertex id that is
/// out of range; they return an absent or neutral value instead.
pub trait Graph {
    type EdgeType: EdgeType;

    type NeighborsIter<'a>: Iterator<Item = VertexId>
    where
        Self: 'a;

    /// Number of vertices, fixed when the graph was created.
    fn vertex_count(&self) -> usize;

    /// Number of stored directed entries.
    ///
    /// For undirected graphs, an edge between two distinct vertices is stored
    /// in both directions and so it is counted twice. A self-loop is counted
    /// once.
    fn edge_count(&self) -> usize;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }

    fn contains_vertex(&self, id: VertexId) -> bool {
        id < self.vertex_count()
    }

    /// Returns the cost of the edge from `from` to `to` if it exists.
    fn edge(&self, from: VertexId, to: VertexId) -> Option<Cost>;

    /// Returns the cost of the edge from `from` to `to`, or zero if the edge
    /// does not exist or any of the vertices is out of range.
    fn edge_cost(&self, from: VertexId, to: VertexId) -> Cost {
        self.edge(from, to).unwrap_or(0)
    }

    fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge(from, to).is_some()
    }

    /// Returns an iterator over the vertices adjacent to `src`.
    ///
    /// The order is defined by the storage and it is the same on every call
    /// as long as the graph is not mutated. The iterator is empty if `src` is
    /// out of range.
    fn neighbors(&self, src: VertexId) -> Self::NeighborsIter<'_>;

    fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).count()
    }

    /// Returns an iterator over all stored edges, vertex by vertex in the
    /// order of [`neighbors`](Graph::neighbors).
    fn edges(&self) -> EdgesIter<'_, Self>
    where
        Self: Sized,
    {
        EdgesIter {
            graph: self,
            src: 0,
            neighbors: None,
        }
    }
}

/// Mutation capabilities of graph storages.
pub trait GraphMut: Graph {
    /// Inserts an edge from `from` to `to`, and its mirror if the graph is
    /// undirected.
    ///
    /// An already existing edge is never overwritten.
    fn try_insert(&mut self, from: VertexId, to: VertexId, cost: Cost)
        -> Result<(), InsertEdgeError>;

    /// Removes the edge from `from` to `to`, and its mirror if the graph is
    /// undirected. Returns the cost of the removed edge.
    fn try_remove(&mut self, from: VertexId, to: VertexId) -> Result<Cost, RemoveEdgeError>;

    /// Same as [`try_insert`](GraphMut::try_insert), but an edge that cannot
    /// be inserted is silently ignored.
    fn insert(&mut self, from: VertexId, to: VertexId, cost: Cost) {
        let _ = self.try_insert(from, to, cost);
    }

    fn insert_edge(&mut self, edge: Edge) {
        self.insert(edge.from, edge.to, edge.cost);
    }

    /// Same as [`try_remove`](GraphMut::try_remove), but returns `None` if
    /// there was nothing to remove.
    fn remove(&mut self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.try_remove(from, to).ok()
    }

    fn remove_edge(&mut self, edge: &Edge) -> Option<Cost> {
        self.remove(edge.from, edge.to)
    }

    fn extend_with_edges<T, I>(&mut self, edges: I)
    where
        T: Into<Edge>,
        I: IntoIterator<Item = T>,
    {
        for edge in edges {
            self.insert_edge(edge.into());
        }
    }
}

/// Construction of an edgeless graph with a fixed number of vertices.
pub trait Create: GraphMut + Sized {
    fn with_vertex_count(vertex_count: usize) -> Self;

    fn from_edges<T, I>(vertex_count: usize, edges: I) -> Self
    where
        T: Into<Edge>,
        I: IntoIterator<Item = T>,
    {
        let mut graph = Self::with_vertex_count(vertex_count);
        graph.extend_with_edges(edges);
        graph
    }
}

pub struct EdgesIter<'a, G: Graph + 'a> {
    graph: &'a G,
    src: VertexId,
    neighbors: Option<G::NeighborsIter<'a>>,
}

impl<'a, G: Graph + 'a> Iterator for EdgesIter<'a, G> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.src >= self.graph.vertex_count() {
                return None;
            }

            let graph = self.graph;
            let src = self.src;
            let neighbors = self.neighbors.get_or_insert_with(|| graph.neighbors(src));

            match neighbors.next() {
                Some(dst) => return Some(Edge::new(src, dst, graph.edge_cost(src, dst))),
                None => {
                    self.neighbors = None;
                    self.src += 1;
                }
            }
        }
    }
}

impl<G: Graph> Graph for &G {
    type EdgeType = G::EdgeType;

    type NeighborsIter<'a> = G::NeighborsIter<'a>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn edge(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        (**self).edge(from, to)
    }

    fn neighbors(&self, src: VertexId) -> Self::NeighborsIter<'_> {
        (**self).neighbors(src)
    }
}

impl<G: Graph> Graph for &mut G {
    type EdgeType = G::EdgeType;

    type NeighborsIter<'a> = G::NeighborsIter<'a>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn edge(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        (**self).edge(from, to)
    }

    fn neighbors(&self, src: VertexId) -> Self::NeighborsIter<'_> {
        (**self).neighbors(src)
    }
}

impl<G: GraphMut> GraphMut for &mut G {
    fn try_insert(
        &mut self,
        from: VertexId,
        to: VertexId,
        cost: Cost,
    ) -> Result<(), InsertEdgeError> {
        (**self).try_insert(from, to, cost)
    }

    fn try_remove(&mut self, from: VertexId, to: VertexId) -> Result<Cost, RemoveEdgeError> {
        (**self).try_remove(from, to)
    }
}
