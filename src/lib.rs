//! Weighted graphs with a fixed vertex set and path searching on top of them.
//!
//! The [storages](storage) implement the traits from [`core`], so the
//! [algorithms](algo) work with either of them.
//!
//! # Examples
//!
//! ```
//! use adjgraph::prelude::*;
//!
//! let mut graph = SparseGraph::new_directed(4);
//! graph.extend_with_edges([(0, 1, 2), (1, 2, 3), (0, 2, 10), (2, 3, 1)]);
//!
//! assert_eq!(
//!     DeepSearcher::new(&graph).format_paths(0, 3),
//!     vec!["0-1-2-3, 6", "0-2-3, 11"]
//! );
//! assert_eq!(
//!     ShortestPathSearcher::new(&graph).format_path(0, 3),
//!     "0-1-2-3, 6"
//! );
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod io;
pub mod storage;

pub mod prelude {
    pub use crate::{
        algo::{DeepSearcher, Path, ShortestPathSearcher},
        core::{
            marker::{Directed, EdgeType, Undirected},
            Cost, Create, Edge, Graph, GraphMut, VertexId,
        },
        io::ScanEdges,
        storage::{DenseGraph, SparseGraph},
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn require_graph(_: impl Graph) {}
    fn require_graph_mut(_: impl GraphMut) {}
    fn require_create<G: Create>() {}
    fn require_scan_edges<G: ScanEdges>() {}

    #[test]
    fn trait_impl() {
        let mut dense = DenseGraph::<Directed>::new(1);
        let mut sparse = SparseGraph::<Undirected>::new(1);

        require_graph(dense.clone());
        require_graph(&dense);
        require_graph_mut(&mut dense);

        require_graph(sparse.clone());
        require_graph(&sparse);
        require_graph_mut(&mut sparse);

        require_create::<DenseGraph<Undirected>>();
        require_create::<SparseGraph<Directed>>();
        require_scan_edges::<DenseGraph<Directed>>();
        require_scan_edges::<SparseGraph<Undirected>>();
    }
}
