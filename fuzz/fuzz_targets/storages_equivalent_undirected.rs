#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    algo::ShortestPathSearcher,
    core::marker::Undirected,
    infra::{arbitrary::MutOpsSeq, testing::check_equivalence},
    storage::{DenseGraph, SparseGraph},
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut dense = ops.create::<DenseGraph<Undirected>>();
    let mut sparse = ops.create::<SparseGraph<Undirected>>();

    for op in ops {
        // The dense storage cannot hold zero-cost edges.
        if op.is_zero_cost() {
            continue;
        }

        let dense_result = op.apply(&mut dense);
        let sparse_result = op.apply(&mut sparse);

        assert_eq!(dense_result, sparse_result, "{op:?}");

        check_equivalence(&dense, &sparse)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    let dense = ShortestPathSearcher::new(&dense);
    let sparse = ShortestPathSearcher::new(&sparse);

    for v in 0..dense.vertex_count() {
        for w in 0..dense.vertex_count() {
            assert_eq!(dense.distance(v, w), sparse.distance(v, w), "distance {v}-{w}");
        }
    }
});
