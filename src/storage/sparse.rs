//! Adjacency list storage.
//!
//! Every vertex owns a list of `(neighbor, cost)` entries kept in insertion
//! order. Edge lookup, removal and listing neighbors are _O(d)_ where _d_ is
//! the degree of the vertex, insertion is _O(d)_ because of the check for an
//! already existing edge.
//!
//! Unlike [`DenseGraph`](super::DenseGraph), this storage can hold edges with
//! zero cost.

use std::{fmt, marker::PhantomData};

use crate::{
    core::{
        error::{InsertEdgeError, InsertEdgeErrorKind, RemoveEdgeError, RemoveEdgeErrorKind},
        marker::{Directed, EdgeType, Undirected},
        Cost, Create, Edge, Graph, GraphMut, VertexId,
    },
    io::dump::AdjacencyDump,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdjEntry {
    to: VertexId,
    cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGraph<Ty = Directed> {
    lists: Vec<Vec<AdjEntry>>,
    n_edges: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<Ty: EdgeType> SparseGraph<Ty> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); vertex_count],
            n_edges: 0,
            ty: PhantomData,
        }
    }

    fn list(&self, id: VertexId) -> &[AdjEntry] {
        self.lists.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    fn position(&self, from: VertexId, to: VertexId) -> Option<usize> {
        self.list(from).iter().position(|entry| entry.to == to)
    }

    /// Appends the entry unless the list already contains `to`. Returns
    /// whether the entry was appended.
    fn push_entry(&mut self, from: VertexId, to: VertexId, cost: Cost) -> bool {
        if self.position(from, to).is_some() {
            return false;
        }

        self.lists[from].push(AdjEntry { to, cost });
        self.n_edges += 1;
        true
    }

    fn remove_entry(&mut self, from: VertexId, to: VertexId) -> Option<Cost> {
        let index = self.position(from, to)?;

        // Not `swap_remove`, the order of the remaining neighbors must stay.
        let entry = self.lists[from].remove(index);
        self.n_edges -= 1;
        Some(entry.cost)
    }
}

impl SparseGraph<Directed> {
    pub fn new_directed(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl SparseGraph<Undirected> {
    pub fn new_undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl<Ty: EdgeType> Graph for SparseGraph<Ty> {
    type EdgeType = Ty;

    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn edge(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.list(from)
            .iter()
            .find(|entry| entry.to == to)
            .map(|entry| entry.cost)
    }

    fn neighbors(&self, src: VertexId) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            entries: self.list(src).iter(),
        }
    }

    fn degree(&self, id: VertexId) -> usize {
        self.list(id).len()
    }
}

impl<Ty: EdgeType> GraphMut for SparseGraph<Ty> {
    fn try_insert(
        &mut self,
        from: VertexId,
        to: VertexId,
        cost: Cost,
    ) -> Result<(), InsertEdgeError> {
        let error = |kind| InsertEdgeError::new(Edge::new(from, to, cost), kind);

        if from >= self.lists.len() {
            return Err(error(InsertEdgeErrorKind::SourceAbsent));
        }

        if to >= self.lists.len() {
            return Err(error(InsertEdgeErrorKind::DestinationAbsent));
        }

        if !self.push_entry(from, to, cost) {
            return Err(error(InsertEdgeErrorKind::AlreadyExists));
        }

        // For a self-loop the mirror is the edge itself and it already exists.
        if !Ty::is_directed() {
            self.push_entry(to, from, cost);
        }

        Ok(())
    }

    fn try_remove(&mut self, from: VertexId, to: VertexId) -> Result<Cost, RemoveEdgeError> {
        let error = |kind| RemoveEdgeError::new(from, to, kind);

        if from >= self.lists.len() {
            return Err(error(RemoveEdgeErrorKind::SourceAbsent));
        }

        if to >= self.lists.len() {
            return Err(error(RemoveEdgeErrorKind::DestinationAbsent));
        }

        let cost = self
            .remove_entry(from, to)
            .ok_or_else(|| error(RemoveEdgeErrorKind::EdgeAbsent))?;

        if !Ty::is_directed() {
            self.remove_entry(to, from);
        }

        Ok(cost)
    }
}

impl<Ty: EdgeType> Create for SparseGraph<Ty> {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl<Ty: EdgeType> fmt::Display for SparseGraph<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&AdjacencyDump::new(self), f)
    }
}

/// Neighbors of a vertex in a [`SparseGraph`], in insertion order.
pub struct NeighborsIter<'a> {
    entries: std::slice::Iter<'a, AdjEntry>,
}

impl Iterator for NeighborsIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| entry.to)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for NeighborsIter<'_> {}
