use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::core::{
    error::{InsertEdgeErrorKind, RemoveEdgeErrorKind},
    Cost, Create, GraphMut, VertexId,
};

/// Vertex index that is mapped into the range of the graph before use.
///
/// The mapping leaves one index past the last vertex, so that operations on
/// absent vertices are exercised as well.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub u16);

impl Index {
    pub fn get(&self, vertex_count: usize) -> VertexId {
        self.0 as usize % (vertex_count + 1)
    }
}

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq)]
pub enum MutOp {
    Insert(Index, Index, i8),
    Remove(Index, Index),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutOpResult {
    Insert(Result<(), InsertEdgeErrorKind>),
    Remove(Result<Cost, RemoveEdgeErrorKind>),
}

impl MutOp {
    pub fn apply<G>(self, graph: &mut G) -> MutOpResult
    where
        G: GraphMut,
    {
        let n = graph.vertex_count();

        match self {
            MutOp::Insert(from, to, cost) => MutOpResult::Insert(
                graph
                    .try_insert(from.get(n), to.get(n), Cost::from(cost))
                    .map_err(|error| error.kind),
            ),
            MutOp::Remove(from, to) => MutOpResult::Remove(
                graph
                    .try_remove(from.get(n), to.get(n))
                    .map_err(|error| error.kind),
            ),
        }
    }

    /// Returns `true` for insertion of an edge with zero cost, which only some
    /// storages support.
    pub fn is_zero_cost(&self) -> bool {
        matches!(self, MutOp::Insert(_, _, 0))
    }
}

/// A graph with fixed number of vertices and a sequence of operations on it.
pub struct MutOpsSeq {
    pub vertex_count: usize,
    pub ops: Vec<MutOp>,
}

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl MutOpsSeq {
    pub fn create<G: Create>(&self) -> G {
        G::with_vertex_count(self.vertex_count)
    }

    pub fn replay<G>(self, graph: &mut G)
    where
        G: GraphMut,
    {
        println!("let mut graph = Graph::with_vertex_count({});", self.vertex_count);
        println!();

        for op in self {
            let n = graph.vertex_count();

            match op {
                MutOp::Insert(from, to, cost) => {
                    println!("graph.insert({}, {}, {cost});", from.get(n), to.get(n))
                }
                MutOp::Remove(from, to) => {
                    println!("graph.remove({}, {});", from.get(n), to.get(n))
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq {{")?;
        writeln!(f, "    vertex_count: {},", self.vertex_count)?;
        writeln!(f, "    ops: vec![")?;

        for op in self.ops.iter() {
            writeln!(f, "        MutOp::{:?},", op)?;
        }

        writeln!(f, "    ],")?;
        writeln!(f, "}}")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_count = u.int_in_range(0..=64)?;
        let mut ops = Vec::new();

        while !u.is_empty() {
            // Prefer insertions so that the graph does not stay empty.
            let op = match u.ratio(3u8, 4u8) {
                Ok(true) => u.arbitrary().map(|(from, to, cost)| MutOp::Insert(from, to, cost)),
                Ok(false) => u.arbitrary().map(|(from, to)| MutOp::Remove(from, to)),
                Err(error) => Err(error),
            };

            match op {
                Ok(op) => ops.push(op),
                Err(_) => break,
            }
        }

        Ok(MutOpsSeq { vertex_count, ops })
    }
}
