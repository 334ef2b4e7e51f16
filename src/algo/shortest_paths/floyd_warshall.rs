use crate::{
    common::SquareMatrix,
    core::{Cost, Graph, VertexId},
};

pub type DistanceMatrix = SquareMatrix<Option<Cost>>;
pub type ViaMatrix = SquareMatrix<Option<VertexId>>;

pub fn floyd_warshall<G>(graph: &G) -> (DistanceMatrix, ViaMatrix)
where
    G: Graph,
{
    let n = graph.vertex_count();

    let mut distance = SquareMatrix::new(n, None);
    let mut via = SquareMatrix::new(n, None);

    for v in 0..n {
        distance[(v, v)] = Some(0);
    }

    // Self-loops are ignored, the diagonal starts at zero.
    for edge in graph.edges() {
        if !edge.is_self_loop() {
            distance[(edge.from, edge.to)] = Some(edge.cost);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = distance[(i, k)] else {
                continue;
            };

            for j in 0..n {
                let Some(kj) = distance[(k, j)] else {
                    continue;
                };

                // Distances diverge on negative cycles.
                let through = ik.saturating_add(kj);

                // Relax if unknown or better.
                let relax = match distance[(i, j)] {
                    Some(ij) => through < ij,
                    None => true,
                };

                if relax {
                    distance[(i, j)] = Some(through);
                    via[(i, j)] = Some(k);
                }
            }
        }
    }

    (distance, via)
}
