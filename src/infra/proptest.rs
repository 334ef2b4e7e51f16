use std::{collections::BTreeSet, fmt, marker::PhantomData};

use proptest::{
    prelude::Rng,
    strategy::{BoxedStrategy, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::core::{
    marker::{Directed, EdgeType, Undirected},
    Cost, Create, VertexId,
};

pub fn graph<G: Create>(cost: impl Strategy<Value = Cost> + 'static) -> GraphStrategy<G> {
    GraphStrategy::new(cost)
}

pub fn graph_directed<G: Create<EdgeType = Directed>>(
    cost: impl Strategy<Value = Cost> + 'static,
) -> GraphStrategy<G> {
    GraphStrategy::new(cost)
}

pub fn graph_undirected<G: Create<EdgeType = Undirected>>(
    cost: impl Strategy<Value = Cost> + 'static,
) -> GraphStrategy<G> {
    GraphStrategy::new(cost)
}

pub struct GraphStrategy<G> {
    cost: BoxedStrategy<Cost>,
    params: StrategyParams,
    graph: PhantomData<fn() -> G>,
}

// G is phantom data, we should not require Debug bound on it.
impl<G> fmt::Debug for GraphStrategy<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("cost", &self.cost)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<G> GraphStrategy<G> {
    pub fn new(cost: impl Strategy<Value = Cost> + 'static) -> Self {
        Self::with_params(cost, StrategyParams::default())
    }

    pub fn with_params(cost: impl Strategy<Value = Cost> + 'static, params: StrategyParams) -> Self {
        Self {
            cost: cost.boxed(),
            params,
            graph: PhantomData,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph(1..10).max_size(8).allow_loops()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            allow_loops: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.1)
    }
}

impl<G> Strategy for GraphStrategy<G>
where
    G: Create + fmt::Debug,
{
    type Tree = GraphValueTree<G>;
    type Value = G;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        let mut edges = Vec::new();

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf
        //
        // The pairs are enumerated in the lower triangle (w < v, or w <= v if
        // loops are allowed) and skipped with geometric distribution.
        let mut v = if self.params.allow_loops { 0 } else { 1 };
        let mut w = usize::MAX; // -1

        while p > 0.0 && v < n {
            let r: f32 = runner.rng().gen();
            let skip = ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;
            w = w.wrapping_add(1).saturating_add(skip);

            if self.params.allow_loops {
                while w > v && v < n {
                    w -= v + 1;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v < n {
                let (s, t) = if runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((s, t, self.cost.new_tree(runner)?));

                // A directed graph may also contain the opposite edge.
                let directed = <G::EdgeType as EdgeType>::is_directed();
                if directed && s != t && runner.rng().gen_bool(p as f64) {
                    edges.push((t, s, self.cost.new_tree(runner)?));
                }
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            edges,
            removed_vertices: BTreeSet::new(),
            removed_edges: BTreeSet::new(),
            shrink: Shrink::Vertex(0),
            previous: None,
            graph: PhantomData,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    Vertex(VertexId),
    Edge(usize),
    Cost(usize),
}

type EdgeTree = (VertexId, VertexId, Box<dyn ValueTree<Value = Cost>>);

pub struct GraphValueTree<G> {
    vertex_count: usize,
    edges: Vec<EdgeTree>,
    removed_vertices: BTreeSet<VertexId>,
    removed_edges: BTreeSet<usize>,
    shrink: Shrink,
    previous: Option<Shrink>,
    graph: PhantomData<fn() -> G>,
}

impl<G> fmt::Debug for GraphValueTree<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphValueTree")
            .field("vertex_count", &self.vertex_count)
            .field("edge_count", &self.edges.len())
            .field("removed_vertices", &self.removed_vertices)
            .field("removed_edges", &self.removed_edges)
            .field("shrink", &self.shrink)
            .finish()
    }
}

impl<G> GraphValueTree<G> {
    fn edge_exists(&self, e: usize) -> bool {
        let (src, dst, _) = &self.edges[e];

        !(self.removed_edges.contains(&e)
            || self.removed_vertices.contains(src)
            || self.removed_vertices.contains(dst))
    }
}

impl<G> ValueTree for GraphValueTree<G>
where
    G: Create + fmt::Debug,
{
    type Value = G;

    fn current(&self) -> G {
        // Removed vertices are skipped and the remaining ones are renumbered
        // so that they stay in the `0..n` range.
        let mut ids = Vec::with_capacity(self.vertex_count);
        let mut next = 0;

        for v in 0..self.vertex_count {
            if self.removed_vertices.contains(&v) {
                ids.push(None);
            } else {
                ids.push(Some(next));
                next += 1;
            }
        }

        let mut graph = G::with_vertex_count(next);

        for (e, (src, dst, cost)) in self.edges.iter().enumerate() {
            if self.removed_edges.contains(&e) {
                continue;
            }

            if let (Some(src), Some(dst)) = (ids[*src], ids[*dst]) {
                graph.insert(src, dst, cost.current());
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        // First remove vertices one by one, then edges and finally simplify
        // the costs. Removing a vertex drops its incident edges as well.
        loop {
            match self.shrink {
                Shrink::Vertex(v) => {
                    if v >= self.vertex_count {
                        self.shrink = Shrink::Edge(0);
                        continue;
                    }

                    self.shrink = Shrink::Vertex(v + 1);

                    if self.removed_vertices.insert(v) {
                        self.previous = Some(Shrink::Vertex(v));
                        return true;
                    }
                }
                Shrink::Edge(e) => {
                    if e >= self.edges.len() {
                        self.shrink = Shrink::Cost(0);
                        continue;
                    }

                    self.shrink = Shrink::Edge(e + 1);

                    if self.edge_exists(e) {
                        self.removed_edges.insert(e);
                        self.previous = Some(Shrink::Edge(e));
                        return true;
                    }
                }
                Shrink::Cost(e) => {
                    if e >= self.edges.len() {
                        return false;
                    }

                    if self.edge_exists(e) && self.edges[e].2.simplify() {
                        self.previous = Some(Shrink::Cost(e));
                        return true;
                    }

                    self.shrink = Shrink::Cost(e + 1);
                }
            }
        }
    }

    fn complicate(&mut self) -> bool {
        match self.previous.take() {
            None => false,
            Some(Shrink::Vertex(v)) => {
                self.removed_vertices.remove(&v);
                true
            }
            Some(Shrink::Edge(e)) => {
                self.removed_edges.remove(&e);
                true
            }
            Some(Shrink::Cost(e)) => {
                if self.edges[e].2.complicate() {
                    self.previous = Some(Shrink::Cost(e));
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::Graph,
        infra::testing::check_consistency,
        storage::{DenseGraph, SparseGraph},
    };

    fn sample<G: Create + fmt::Debug>(strategy: &GraphStrategy<G>, runner: &mut TestRunner) -> G {
        strategy.new_tree(runner).unwrap().current()
    }

    #[test]
    fn respects_max_size() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph_directed::<SparseGraph<Directed>>(1..10i64).max_size(5);

        for _ in 0..100 {
            let graph = sample(&strategy, &mut runner);
            assert!(graph.vertex_count() <= 5);
            check_consistency(&graph).unwrap();
        }
    }

    #[test]
    fn no_loops_by_default() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph_undirected::<DenseGraph<Undirected>>(1..10i64).max_size(8);

        for _ in 0..100 {
            let graph = sample(&strategy, &mut runner);
            assert!(graph.edges().all(|edge| !edge.is_self_loop()));
        }
    }

    #[test]
    fn loops_allowed() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph::<SparseGraph<Directed>>(1..10i64)
            .max_size(8)
            .allow_loops();

        let has_loop = (0..200)
            .map(|_| sample(&strategy, &mut runner))
            .any(|graph| graph.edges().any(|edge| edge.is_self_loop()));

        assert!(has_loop);
    }

    #[test]
    fn shrinks_to_empty() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph_directed::<SparseGraph<Directed>>(1..10i64).max_size(10);

        let mut tree = loop {
            let tree = strategy.new_tree(&mut runner).unwrap();
            if tree.current().edge_count() > 0 {
                break tree;
            }
        };

        // Accept every simplification, the result must be the empty graph.
        while tree.simplify() {}

        assert_eq!(tree.current().vertex_count(), 0);
    }

    #[test]
    fn complicate_restores_removed_vertex() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph_directed::<DenseGraph<Directed>>(1..10i64).max_size(10);

        let mut tree = loop {
            let tree = strategy.new_tree(&mut runner).unwrap();
            if tree.current().vertex_count() > 0 {
                break tree;
            }
        };

        let before = tree.current();

        assert!(tree.simplify());
        assert_eq!(tree.current().vertex_count(), before.vertex_count() - 1);

        assert!(tree.complicate());
        assert_eq!(tree.current(), before);
    }
}
