use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::{Cost, Create, Graph, VertexId};

/// Creates a complete graph (without self-loops) where the edge from `u` to
/// `v` has cost `cost(u, v)`.
pub fn create_complete<G, F>(vertex_count: usize, cost: F) -> G
where
    G: Create,
    F: Fn(VertexId, VertexId) -> Cost,
{
    let mut graph = G::with_vertex_count(vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v {
                graph.insert(u, v, cost(u, v));
            }
        }
    }

    graph
}

/// Creates a path `0 - 1 - ... - (n - 1)` where every edge has cost `cost`.
pub fn create_path<G>(vertex_count: usize, cost: Cost) -> G
where
    G: Create,
{
    let mut graph = G::with_vertex_count(vertex_count);

    for v in 1..vertex_count {
        graph.insert(v - 1, v, cost);
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("neighbor {1} of vertex {0} is out of range")]
    NeighborOutOfRange(VertexId, VertexId),
    #[error("neighbor {1} of vertex {0} is listed more than once")]
    DuplicateNeighbor(VertexId, VertexId),
    #[error("neighbor {1} of vertex {0} has no edge")]
    NeighborWithoutEdge(VertexId, VertexId),
    #[error("edge {0}-{1} exists but it is not listed in neighbors")]
    EdgeNotInNeighbors(VertexId, VertexId),
    #[error("edge {0}-{1} has cost {2:?} but its mirror has cost {3:?}")]
    AsymmetricUndirected(VertexId, VertexId, Option<Cost>, Option<Cost>),
    #[error("sum of degrees ({0}) is not equal to edge count ({1})")]
    DegreeSumMismatch(usize, usize),
}

pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: Graph,
{
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    let listed = graph.edges().count();
    if listed != edge_count {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            listed, edge_count,
        ));
    }

    let mut degree_sum = 0;

    for v in 0..vertex_count {
        let mut seen = BTreeSet::new();

        for w in graph.neighbors(v) {
            if w >= vertex_count {
                return Err(ConsistencyCheckError::NeighborOutOfRange(v, w));
            }

            if !seen.insert(w) {
                return Err(ConsistencyCheckError::DuplicateNeighbor(v, w));
            }

            if graph.edge(v, w).is_none() {
                return Err(ConsistencyCheckError::NeighborWithoutEdge(v, w));
            }
        }

        for w in 0..vertex_count {
            if graph.contains_edge(v, w) && !seen.contains(&w) {
                return Err(ConsistencyCheckError::EdgeNotInNeighbors(v, w));
            }

            if !graph.is_directed() && graph.edge(v, w) != graph.edge(w, v) {
                return Err(ConsistencyCheckError::AsymmetricUndirected(
                    v,
                    w,
                    graph.edge(v, w),
                    graph.edge(w, v),
                ));
            }
        }

        degree_sum += graph.degree(v);
    }

    if degree_sum != edge_count {
        return Err(ConsistencyCheckError::DegreeSumMismatch(
            degree_sum, edge_count,
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquivalenceCheckError {
    #[error("vertex counts differ ({0} vs {1})")]
    VertexCountMismatch(usize, usize),
    #[error("edge counts differ ({0} vs {1})")]
    EdgeCountMismatch(usize, usize),
    #[error("edge {0}-{1} has cost {2:?} vs {3:?}")]
    EdgeMismatch(VertexId, VertexId, Option<Cost>, Option<Cost>),
}

/// Checks that two graphs, possibly of different storages, contain exactly
/// the same edges. The order of neighbors is not compared.
pub fn check_equivalence<G1, G2>(lhs: &G1, rhs: &G2) -> Result<(), EquivalenceCheckError>
where
    G1: Graph,
    G2: Graph,
{
    if lhs.vertex_count() != rhs.vertex_count() {
        return Err(EquivalenceCheckError::VertexCountMismatch(
            lhs.vertex_count(),
            rhs.vertex_count(),
        ));
    }

    if lhs.edge_count() != rhs.edge_count() {
        return Err(EquivalenceCheckError::EdgeCountMismatch(
            lhs.edge_count(),
            rhs.edge_count(),
        ));
    }

    let n = lhs.vertex_count();

    for v in 0..n {
        for w in 0..n {
            let (l, r) = (lhs.edge(v, w), rhs.edge(v, w));
            if l != r {
                return Err(EquivalenceCheckError::EdgeMismatch(v, w, l, r));
            }
        }
    }

    Ok(())
}
