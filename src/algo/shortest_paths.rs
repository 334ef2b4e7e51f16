//! Find [all-pairs shortest paths] and their distances in a graph.
//!
//! [`ShortestPathSearcher`] runs the [Floyd–Warshall algorithm] once on
//! construction and then answers distance and path queries for any pair of
//! vertices. It copies everything it needs, so the graph can be mutated or
//! dropped afterwards (the results then describe the snapshot).
//!
//! Negative costs are accepted. If the graph contains a negative cycle, the
//! distances are not meaningful, which can be detected with
//! [`has_negative_cycle`](ShortestPathSearcher::has_negative_cycle).
//!
//! Distances saturate at [`Cost::MAX`] and [`Cost::MIN`] instead of
//! overflowing. A saturated distance is not the true cost of the path.
//!
//! [all-pairs shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#All-pairs_shortest_paths
//! [Floyd–Warshall algorithm]:
//!     https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::ShortestPathSearcher, core::GraphMut, storage::SparseGraph};
//!
//! let mut graph = SparseGraph::new_directed(4);
//! graph.extend_with_edges([(0, 1, 2), (1, 2, 3), (0, 2, 10), (2, 3, 1)]);
//!
//! let searcher = ShortestPathSearcher::new(&graph);
//!
//! assert_eq!(searcher.distance(0, 3), Some(6));
//! assert_eq!(searcher.format_path(0, 3), "0-1-2-3, 6");
//! assert_eq!(searcher.format_path(3, 0), "3-0, inf");
//! ```

use crate::core::{Cost, Graph, VertexId};

use super::Path;

mod floyd_warshall;

use floyd_warshall::{floyd_warshall, DistanceMatrix, ViaMatrix};

/// Shortest paths and their distances between all pairs of vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPathSearcher {
    distance: DistanceMatrix,
    // The highest intermediate vertex of the shortest path, `None` if the
    // path is a direct edge or there is no path.
    via: ViaMatrix,
}

impl ShortestPathSearcher {
    pub fn new<G>(graph: &G) -> Self
    where
        G: Graph,
    {
        let (distance, via) = floyd_warshall(graph);

        tracing::debug!(
            vertex_count = distance.size(),
            "computed all-pairs shortest paths"
        );

        Self { distance, via }
    }

    /// Number of vertices of the graph at the time of construction.
    pub fn vertex_count(&self) -> usize {
        self.distance.size()
    }

    /// Returns the cost of the shortest path from `from` to `to`, or `None`
    /// if `to` is not reachable or any of the vertices is out of range.
    ///
    /// The distance from a vertex to itself is always zero (unless the vertex
    /// lies on a negative cycle).
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.distance.get(from, to).copied().flatten()
    }

    /// Returns the shortest path from `from` to `to`, or `None` if there is
    /// no such path.
    ///
    /// For `from == to`, the path consists of the single vertex. `None` is
    /// also returned if the path cannot be reconstructed because of a
    /// negative cycle.
    pub fn path(&self, from: VertexId, to: VertexId) -> Option<Path> {
        let cost = self.distance(from, to)?;

        let mut vertices = vec![from];

        if from != to {
            if !self.trace(from, to, 0, &mut vertices) {
                return None;
            }

            vertices.push(to);
        }

        Some(Path::new(vertices, cost))
    }

    /// Formats the shortest path as `v-k1-...-w, cost`, where `k1, ...` are
    /// the intermediate vertices. If there is no path, it is `v-w, inf`.
    ///
    /// Unlike [`Path`]'s `Display`, both endpoints are always written, so the
    /// trivial path is `v-v, 0`. If the path cannot be reconstructed because
    /// of a negative cycle, only the endpoints are written.
    pub fn format_path(&self, from: VertexId, to: VertexId) -> String {
        let mut vertices = vec![from];
        if !self.trace(from, to, 0, &mut vertices) {
            vertices.truncate(1);
        }
        vertices.push(to);

        let route = vertices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");

        match self.distance(from, to) {
            Some(cost) => format!("{route}, {cost}"),
            None => format!("{route}, inf"),
        }
    }

    /// Returns `true` if any vertex has a negative distance to itself.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.vertex_count()).any(|v| matches!(self.distance(v, v), Some(cost) if cost < 0))
    }

    // Appends intermediate vertices of the path between `from` and `to` to
    // `out`, exclusive of both. Returns `false` if the reconstruction does not
    // terminate within the vertex count, which happens only with negative
    // cycles.
    fn trace(&self, from: VertexId, to: VertexId, depth: usize, out: &mut Vec<VertexId>) -> bool {
        let Some(k) = self.via.get(from, to).copied().flatten() else {
            return true;
        };

        if depth >= self.vertex_count() || out.len() > self.vertex_count() {
            return false;
        }

        if !self.trace(from, k, depth + 1, out) {
            return false;
        }

        out.push(k);

        self.trace(k, to, depth + 1, out)
    }
}
