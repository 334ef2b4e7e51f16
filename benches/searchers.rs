mod common;

use adjgraph::{
    algo::{DeepSearcher, ShortestPathSearcher},
    core::marker::{Directed, Undirected},
    storage::{DenseGraph, SparseGraph},
};
use common::{random_graph, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(consts = [50, 200], args = [0.25, 0.75])]
fn floyd_warshall_dense<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph: DenseGraph<Directed> = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPathSearcher::new(&graph));
}

#[divan::bench(consts = [50, 200], args = [0.25, 0.75])]
fn floyd_warshall_sparse<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph: SparseGraph<Directed> = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPathSearcher::new(&graph));
}

#[divan::bench(consts = [200])]
fn format_path<const N: usize>(bencher: divan::Bencher) {
    let graph: SparseGraph<Directed> = random_graph(N, 0.05, &mut Rng::with_seed(RANDOM_SEED));
    let searcher = ShortestPathSearcher::new(&graph);

    bencher.bench(|| {
        (0..N)
            .map(|v| searcher.format_path(v, N - 1 - v).len())
            .sum::<usize>()
    });
}

// The number of simple paths grows exponentially, so the graphs must stay
// small and sparse.
#[divan::bench(consts = [10, 14], args = [0.2, 0.4])]
fn deep_search_dense<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph: DenseGraph<Undirected> = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| DeepSearcher::new(&graph).paths(0, N - 1));
}

#[divan::bench(consts = [10, 14], args = [0.2, 0.4])]
fn deep_search_sparse<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph: SparseGraph<Undirected> = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| DeepSearcher::new(&graph).paths(0, N - 1));
}
