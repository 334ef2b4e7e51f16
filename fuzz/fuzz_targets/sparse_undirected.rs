#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    core::marker::Undirected,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    storage::SparseGraph,
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = ops.create::<SparseGraph<Undirected>>();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
