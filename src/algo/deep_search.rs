//! Enumerate all [simple paths] between two vertices.
//!
//! The search is a plain recursive depth-first traversal that branches on
//! every neighbor not yet on the current path. The number of simple paths can
//! be exponential in the size of the graph and so can be the running time.
//! For the cheapest path, use [`ShortestPathSearcher`](super::ShortestPathSearcher).
//!
//! [simple paths]: https://en.wikipedia.org/wiki/Path_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::DeepSearcher, core::GraphMut, storage::DenseGraph};
//!
//! let mut graph = DenseGraph::new_directed(4);
//! graph.extend_with_edges([(0, 1, 2), (1, 2, 3), (0, 2, 10), (2, 3, 1)]);
//!
//! let paths = DeepSearcher::new(&graph).format_paths(0, 3);
//!
//! assert_eq!(paths, vec!["0-1-2-3, 6", "0-2-3, 11"]);
//! ```

use fixedbitset::FixedBitSet;

use crate::{
    common::VisitSet,
    core::{Cost, Graph, VertexId},
};

use super::Path;

#[derive(Debug)]
pub struct DeepSearcher<'a, G> {
    graph: &'a G,
}

impl<'a, G> DeepSearcher<'a, G>
where
    G: Graph,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Returns every simple path from `source` to `target` in the order in
    /// which the depth-first search finds them.
    ///
    /// If `source == target`, the only path is the trivial one with zero
    /// cost. If `target` is not reachable or any of the vertices is out of
    /// range, the result is empty.
    ///
    /// Path costs saturate at [`Cost::MAX`] and [`Cost::MIN`] instead of
    /// overflowing, the same as in
    /// [`ShortestPathSearcher`](super::ShortestPathSearcher).
    pub fn paths(&self, source: VertexId, target: VertexId) -> Vec<Path> {
        if !self.graph.contains_vertex(source) {
            return Vec::new();
        }

        let visited = FixedBitSet::with_capacity(self.graph.vertex_count());
        let paths = self.search(source, target, Vec::new(), visited, 0);

        tracing::debug!(source, target, count = paths.len(), "enumerated simple paths");

        paths
    }

    /// Same as [`paths`](DeepSearcher::paths), but each path is formatted as
    /// `v-k1-...-w, cost`.
    pub fn format_paths(&self, source: VertexId, target: VertexId) -> Vec<String> {
        self.paths(source, target)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    // The trace and the visited set are owned by each call, so sibling
    // branches never see each other's vertices.
    fn search(
        &self,
        current: VertexId,
        target: VertexId,
        mut trace: Vec<VertexId>,
        mut visited: FixedBitSet,
        cost: Cost,
    ) -> Vec<Path> {
        trace.push(current);

        if current == target {
            return vec![Path::new(trace, cost)];
        }

        visited.visit(current);

        let mut paths = Vec::new();

        for next in self.graph.neighbors(current) {
            if visited.is_visited(next) {
                continue;
            }

            let cost = cost.saturating_add(self.graph.edge_cost(current, next));
            paths.extend(self.search(next, target, trace.clone(), visited.clone(), cost));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::{
        core::{
            marker::{Directed, Undirected},
            Create,
        },
        infra::{
            proptest::{graph_directed, graph_undirected},
            testing::{create_complete, create_path},
        },
        storage::{DenseGraph, SparseGraph},
    };

    fn create_scenario_graph<G: Create>() -> G {
        G::from_edges(4, [(0, 1, 2), (1, 2, 3), (0, 2, 10), (2, 3, 1)])
    }

    // Counts simple paths by brute force over all vertex sequences, without
    // any shared code with the searcher.
    fn count_simple_paths<G: Graph>(graph: &G, source: VertexId, target: VertexId) -> usize {
        fn extend<G: Graph>(
            graph: &G,
            path: &mut Vec<VertexId>,
            target: VertexId,
            count: &mut usize,
        ) {
            let last = *path.last().unwrap();
            if last == target {
                *count += 1;
                return;
            }

            for next in 0..graph.vertex_count() {
                if !path.contains(&next) && graph.contains_edge(last, next) {
                    path.push(next);
                    extend(graph, path, target, count);
                    path.pop();
                }
            }
        }

        let mut count = 0;
        extend(graph, &mut vec![source], target, &mut count);
        count
    }

    #[test]
    fn scenario_dense() {
        let graph = create_scenario_graph::<DenseGraph<Directed>>();
        let searcher = DeepSearcher::new(&graph);

        assert_eq!(searcher.format_paths(0, 3), vec!["0-1-2-3, 6", "0-2-3, 11"]);
        assert!(searcher.paths(3, 0).is_empty());
    }

    #[test]
    fn scenario_sparse() {
        let graph = create_scenario_graph::<SparseGraph<Directed>>();
        let searcher = DeepSearcher::new(&graph);

        // Neighbors of 0 were inserted as 1, then 2.
        assert_eq!(searcher.format_paths(0, 3), vec!["0-1-2-3, 6", "0-2-3, 11"]);
    }

    #[test]
    fn sparse_follows_insertion_order() {
        let graph = SparseGraph::<Directed>::from_edges(3, [(0, 2, 1), (0, 1, 1), (1, 2, 1)]);

        assert_eq!(
            DeepSearcher::new(&graph).format_paths(0, 2),
            vec!["0-2, 1", "0-1-2, 2"]
        );
    }

    #[test]
    fn trivial_path() {
        let graph = create_scenario_graph::<DenseGraph<Directed>>();

        let paths = DeepSearcher::new(&graph).paths(2, 2);

        assert_eq!(paths, vec![Path::new(vec![2], 0)]);
        assert_eq!(paths[0].to_string(), "2, 0");
    }

    #[test]
    fn out_of_range() {
        let graph = create_scenario_graph::<SparseGraph<Directed>>();
        let searcher = DeepSearcher::new(&graph);

        assert!(searcher.paths(4, 4).is_empty());
        assert!(searcher.paths(4, 0).is_empty());
        assert!(searcher.paths(0, 4).is_empty());
    }

    #[test]
    fn undirected_does_not_walk_back() {
        let graph = create_path::<DenseGraph<Undirected>>(4, 1);

        assert_eq!(
            DeepSearcher::new(&graph).format_paths(0, 3),
            vec!["0-1-2-3, 3"]
        );
        assert_eq!(
            DeepSearcher::new(&graph).format_paths(3, 0),
            vec!["3-2-1-0, 3"]
        );
    }

    #[test]
    fn vertex_reused_across_branches() {
        // Diamond: both branches go through 3 before reaching 4.
        let graph = SparseGraph::<Directed>::from_edges(
            5,
            [(0, 1, 1), (0, 2, 2), (1, 3, 1), (2, 3, 1), (3, 4, 5)],
        );

        assert_eq!(
            DeepSearcher::new(&graph).format_paths(0, 4),
            vec!["0-1-3-4, 7", "0-2-3-4, 8"]
        );
    }

    #[test]
    fn complete_graph_path_count() {
        // In a complete graph on 5 vertices, there are 1 + 3 + 3 * 2 + 3 * 2 *
        // 1 = 16 simple paths between two distinct vertices.
        let graph = create_complete::<DenseGraph<Undirected>, _>(5, |u, v| (u + v) as Cost);
        let paths = DeepSearcher::new(&graph).paths(0, 4);

        assert_eq!(paths.len(), 16);
        assert_eq!(paths.len(), count_simple_paths(&graph, 0, 4));

        let unique = paths.iter().collect::<FxHashSet<_>>();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn zero_cost_edges_sparse() {
        let graph = SparseGraph::<Directed>::from_edges(3, [(0, 1, 0), (1, 2, 0)]);

        assert_eq!(DeepSearcher::new(&graph).format_paths(0, 2), vec!["0-1-2, 0"]);
    }

    #[test]
    fn cost_saturates() {
        let graph = SparseGraph::<Directed>::from_edges(
            4,
            [(0, 1, Cost::MAX), (1, 2, 1), (0, 3, Cost::MIN), (3, 2, -1)],
        );

        assert_eq!(
            DeepSearcher::new(&graph).format_paths(0, 2),
            vec![format!("0-1-2, {}", Cost::MAX), format!("0-3-2, {}", Cost::MIN)]
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_paths_are_simple_and_costed(graph in graph_directed::<SparseGraph<Directed>>(-20i64..20).max_size(7), source: usize, target: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let (source, target) = (source % n, target % n);
            let paths = DeepSearcher::new(&graph).paths(source, target);

            for path in &paths {
                prop_assert!(path.is_simple());
                prop_assert_eq!(path.source(), Some(source));
                prop_assert_eq!(path.target(), Some(target));

                let cost = path
                    .vertices()
                    .windows(2)
                    .map(|pair| graph.edge(pair[0], pair[1]).unwrap())
                    .sum::<Cost>();
                prop_assert_eq!(path.cost(), cost);
            }

            let unique = paths.iter().collect::<FxHashSet<_>>();
            prop_assert_eq!(unique.len(), paths.len());
            prop_assert_eq!(paths.len(), count_simple_paths(&graph, source, target));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_storages_agree_undirected(graph in graph_undirected::<DenseGraph<Undirected>>(1i64..20).max_size(6), source: usize, target: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let (source, target) = (source % n, target % n);
            let sparse = SparseGraph::<Undirected>::from_edges(n, graph.edges());

            // Dense yields neighbors sorted, so the paths come out in
            // lexicographic order. Sparse order depends on insertion.
            let mut dense_paths = DeepSearcher::new(&graph).paths(source, target);
            let mut sparse_paths = DeepSearcher::new(&sparse).paths(source, target);
            dense_paths.sort_by(|a, b| a.vertices().cmp(b.vertices()));
            sparse_paths.sort_by(|a, b| a.vertices().cmp(b.vertices()));

            prop_assert_eq!(dense_paths, sparse_paths);
        }
    }
}
