use std::{
    fmt,
    io::{self, Write},
};

use crate::core::Graph;

/// Textual dump of the adjacency lists of a graph.
///
/// Every vertex is on its own line followed by its neighbors in the order of
/// [`neighbors`](Graph::neighbors):
///
/// ```text
/// 0: (1, $2); (2, $10);
/// 1: (2, $3);
/// ```
///
/// Each neighbor entry, including the last one, is terminated by `"; "`.
pub struct AdjacencyDump<'a, G> {
    graph: &'a G,
}

impl<'a, G> AdjacencyDump<'a, G>
where
    G: Graph,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    pub fn export<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl<G> fmt::Display for AdjacencyDump<'_, G>
where
    G: Graph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.graph.vertex_count() {
            write!(f, "{v}: ")?;

            for w in self.graph.neighbors(v) {
                write!(f, "({w}, ${}); ", self.graph.edge_cost(v, w))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            marker::{Directed, Undirected},
            Create,
        },
        storage::{DenseGraph, SparseGraph},
    };

    #[test]
    fn dense_directed() {
        let graph = DenseGraph::<Directed>::from_edges(3, [(0, 2, 10), (0, 1, 2), (1, 2, 3)]);

        assert_eq!(
            graph.to_string(),
            "0: (1, $2); (2, $10); \n1: (2, $3); \n2: \n"
        );
    }

    #[test]
    fn sparse_insertion_order() {
        let graph = SparseGraph::<Directed>::from_edges(3, [(0, 2, 10), (0, 1, 2), (1, 2, 3)]);

        assert_eq!(
            graph.to_string(),
            "0: (2, $10); (1, $2); \n1: (2, $3); \n2: \n"
        );
    }

    #[test]
    fn undirected_lists_both_directions() {
        let graph = SparseGraph::<Undirected>::from_edges(2, [(0, 1, -4)]);

        assert_eq!(graph.to_string(), "0: (1, $-4); \n1: (0, $-4); \n");
    }

    #[test]
    fn export_matches_display() {
        let graph = DenseGraph::<Directed>::from_edges(2, [(1, 0, 7)]);

        let mut out = Vec::new();
        AdjacencyDump::new(&graph).export(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), graph.to_string());
    }

    #[test]
    fn empty_graph() {
        assert_eq!(SparseGraph::<Directed>::new(0).to_string(), "");
    }
}
