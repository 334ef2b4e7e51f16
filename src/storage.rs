//! Implementations of graph storages.
//!
//! A _storage_ is an implementation of the graph representation. It
//! implements the traits from the [`core`](crate::core) module, so every
//! algorithm in the crate works with any of them.
//!
//! # Storages and their properties
//!
//! The **dense graph** is backed by an adjacency matrix and provides constant
//! time edge queries and updates, which makes it a good fit for dense graphs.
//! The **sparse graph** keeps an adjacency list per vertex and needs memory
//! only proportional to the number of edges.
//!
//! |                | **[DenseGraph]** | **[SparseGraph]** |
//! |----------------|------------------|-------------------|
//! | lookup edge    | _O(1)_           | _O(d)_            |
//! | insert edge    | _O(1)_           | _O(d)_            |
//! | remove edge    | _O(1)_           | _O(d)_            |
//! | get neighbors  | _O(V)_           | _O(d)_            |
//! | space          | _O(V²)_          | _O(V + E)_        |
//! | neighbor order | increasing id    | insertion order   |
//! | zero cost edge | NO               | YES               |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//!
//! Both storages have a fixed number of vertices given at creation. In
//! undirected graphs, an edge is stored in both directions and both entries
//! count into the [edge count](crate::core::Graph::edge_count).

pub mod dense;
pub mod sparse;

#[doc(inline)]
pub use self::{dense::DenseGraph, sparse::SparseGraph};
