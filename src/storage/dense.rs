//! Adjacency matrix storage.
//!
//! The graph is represented by a V×V matrix of costs accompanied by a bit set
//! of occupied cells. Edge lookup, insertion and removal are _O(1)_, listing
//! neighbors of a vertex is _O(V)_.
//!
//! An edge with cost zero cannot be stored. The textual matrix format uses
//! zero for "no edge" and the storage follows the same convention, so
//! inserting such an edge is a no-op ([`try_insert`](GraphMut::try_insert)
//! reports [`ZeroCost`](InsertEdgeErrorKind::ZeroCost)).

use std::{fmt, marker::PhantomData};

use crate::{
    core::{
        error::{InsertEdgeError, InsertEdgeErrorKind, RemoveEdgeError, RemoveEdgeErrorKind},
        marker::{Directed, EdgeType, Undirected},
        Cost, Create, Edge, Graph, GraphMut, VertexId,
    },
    io::dump::AdjacencyDump,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph<Ty = Directed> {
    matrix: raw::CostMatrix,
    n_edges: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<Ty: EdgeType> DenseGraph<Ty> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            matrix: raw::CostMatrix::with_size(vertex_count),
            n_edges: 0,
            ty: PhantomData,
        }
    }

    fn check_endpoints(&self, from: VertexId, to: VertexId) -> Result<(), InsertEdgeErrorKind> {
        if from >= self.matrix.size() {
            Err(InsertEdgeErrorKind::SourceAbsent)
        } else if to >= self.matrix.size() {
            Err(InsertEdgeErrorKind::DestinationAbsent)
        } else {
            Ok(())
        }
    }
}

impl DenseGraph<Directed> {
    pub fn new_directed(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl DenseGraph<Undirected> {
    pub fn new_undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl<Ty: EdgeType> Graph for DenseGraph<Ty> {
    type EdgeType = Ty;

    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.matrix.size()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn edge(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.matrix.get(from, to)
    }

    fn neighbors(&self, src: VertexId) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            inner: self.matrix.row_flags(src).iter_ones(),
        }
    }
}

impl<Ty: EdgeType> GraphMut for DenseGraph<Ty> {
    fn try_insert(
        &mut self,
        from: VertexId,
        to: VertexId,
        cost: Cost,
    ) -> Result<(), InsertEdgeError> {
        let error = |kind| InsertEdgeError::new(Edge::new(from, to, cost), kind);

        self.check_endpoints(from, to).map_err(error)?;

        if cost == 0 {
            return Err(error(InsertEdgeErrorKind::ZeroCost));
        }

        if !self.matrix.insert(from, to, cost) {
            return Err(error(InsertEdgeErrorKind::AlreadyExists));
        }

        self.n_edges += 1;

        // The mirror is a separate entry and it is counted separately.
        if !Ty::is_directed() && from != to && self.matrix.insert(to, from, cost) {
            self.n_edges += 1;
        }

        Ok(())
    }

    fn try_remove(&mut self, from: VertexId, to: VertexId) -> Result<Cost, RemoveEdgeError> {
        let error = |kind| RemoveEdgeError::new(from, to, kind);

        self.check_endpoints(from, to).map_err(|kind| match kind {
            InsertEdgeErrorKind::SourceAbsent => error(RemoveEdgeErrorKind::SourceAbsent),
            _ => error(RemoveEdgeErrorKind::DestinationAbsent),
        })?;

        let cost = self
            .matrix
            .remove(from, to)
            .ok_or_else(|| error(RemoveEdgeErrorKind::EdgeAbsent))?;

        self.n_edges -= 1;

        if !Ty::is_directed() && from != to && self.matrix.remove(to, from).is_some() {
            self.n_edges -= 1;
        }

        Ok(cost)
    }
}

impl<Ty: EdgeType> Create for DenseGraph<Ty> {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl<Ty: EdgeType> fmt::Display for DenseGraph<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&AdjacencyDump::new(self), f)
    }
}

/// Neighbors of a vertex in a [`DenseGraph`], in increasing order.
pub struct NeighborsIter<'a> {
    inner: bitvec::slice::IterOnes<'a, usize, bitvec::order::Lsb0>,
}

impl Iterator for NeighborsIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

mod raw {
    use bitvec::prelude::*;

    use crate::{common::matrix::index, core::Cost};

    /// Costs of the edges and the flags saying which of them are present.
    ///
    /// A cell that is not flagged always holds zero.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CostMatrix {
        costs: Vec<Cost>,
        flags: BitVec,
        size: usize,
    }

    impl CostMatrix {
        pub fn with_size(size: usize) -> Self {
            Self {
                costs: vec![0; size * size],
                flags: BitVec::repeat(false, size * size),
                size,
            }
        }

        pub fn size(&self) -> usize {
            self.size
        }

        pub fn get(&self, row: usize, col: usize) -> Option<Cost> {
            if row >= self.size || col >= self.size {
                return None;
            }

            let index = index(row, col, self.size);
            self.flags[index].then(|| self.costs[index])
        }

        /// Stores the cost in the cell unless it is already occupied. Returns
        /// whether the cost was stored. Both coordinates must be in range.
        pub fn insert(&mut self, row: usize, col: usize, cost: Cost) -> bool {
            let index = index(row, col, self.size);

            if self.flags[index] {
                return false;
            }

            self.flags.set(index, true);
            self.costs[index] = cost;
            true
        }

        /// Both coordinates must be in range.
        pub fn remove(&mut self, row: usize, col: usize) -> Option<Cost> {
            let index = index(row, col, self.size);

            if !self.flags[index] {
                return None;
            }

            self.flags.set(index, false);
            Some(std::mem::take(&mut self.costs[index]))
        }

        /// Flags of the given row, or an empty slice if the row does not
        /// exist.
        pub fn row_flags(&self, row: usize) -> &BitSlice {
            if row >= self.size {
                return BitSlice::empty();
            }

            let start = index(row, 0, self.size);
            &self.flags[start..start + self.size]
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::storage::tests::*;

    #[test]
    fn basic_undirected() {
        test_basic::<DenseGraph<Undirected>>();
    }

    #[test]
    fn basic_directed() {
        test_basic::<DenseGraph<Directed>>();
    }

    #[test]
    fn out_of_range_undirected() {
        test_out_of_range::<DenseGraph<Undirected>>();
    }

    #[test]
    fn out_of_range_directed() {
        test_out_of_range::<DenseGraph<Directed>>();
    }

    #[test]
    fn reinsert_undirected() {
        test_reinsert::<DenseGraph<Undirected>>();
    }

    #[test]
    fn reinsert_directed() {
        test_reinsert::<DenseGraph<Directed>>();
    }

    #[test]
    fn self_loop_undirected() {
        test_self_loop::<DenseGraph<Undirected>>();
    }

    #[test]
    fn self_loop_directed() {
        test_self_loop::<DenseGraph<Directed>>();
    }

    #[test]
    fn default_edge_undirected() {
        test_default_edge::<DenseGraph<Undirected>>();
    }

    #[test]
    fn default_edge_directed() {
        test_default_edge::<DenseGraph<Directed>>();
    }

    #[test]
    fn zero_cost_is_not_representable() {
        let mut graph = DenseGraph::new_directed(2);

        assert_matches!(
            graph.try_insert(0, 1, 0),
            Err(InsertEdgeError {
                kind: InsertEdgeErrorKind::ZeroCost,
                ..
            })
        );

        graph.insert(0, 1, 0);
        assert_eq!(graph.edge(0, 1), None);
        assert_eq!(graph.edge_cost(0, 1), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn neighbors_are_sorted() {
        let mut graph = DenseGraph::new_directed(5);

        graph.insert(2, 4, 1);
        graph.insert(2, 0, 1);
        graph.insert(2, 3, 1);
        graph.insert(3, 2, 1);

        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![0, 3, 4]);
        assert_eq!(graph.neighbors(4).count(), 0);
        assert_eq!(graph.neighbors(5).count(), 0);
    }

    #[test]
    fn neighbors_restartable() {
        let mut graph = DenseGraph::new_undirected(3);
        graph.insert(0, 1, 5);
        graph.insert(0, 2, 6);

        let first = graph.neighbors(0).collect::<Vec<_>>();
        let second = graph.neighbors(0).collect::<Vec<_>>();

        assert_eq!(first, vec![1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn removed_cell_is_reusable() {
        let mut graph = DenseGraph::new_directed(2);

        graph.insert(0, 1, 3);
        assert_eq!(graph.remove(0, 1), Some(3));
        graph.insert(0, 1, 4);

        assert_eq!(graph.edge(0, 1), Some(4));
        assert_eq!(graph.edge_count(), 1);
    }
}
