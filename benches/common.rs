#![allow(dead_code)]

use adjgraph::core::Create;
use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in adjgraph::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        let skip = ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;
        *w = w.wrapping_add(1).saturating_add(skip);

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

/// Random graph with costs in `1..100`, each edge oriented randomly.
pub fn random_graph<G: Create>(vertex_count: usize, density: f32, rng: &mut Rng) -> G {
    let mut graph = G::with_vertex_count(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let cost = rng.i64(1..100);

        if rng.bool() {
            graph.insert(u, v, cost);
        } else {
            graph.insert(v, u, cost);
        }
    }

    graph
}
