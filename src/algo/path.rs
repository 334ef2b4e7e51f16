use std::fmt;

use crate::core::{Cost, VertexId};

/// A walk through the graph together with its total cost.
///
/// Displayed as `v-k1-k2-...-w, cost`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    vertices: Vec<VertexId>,
    cost: Cost,
}

impl Path {
    pub fn new(vertices: Vec<VertexId>, cost: Cost) -> Self {
        Self { vertices, cost }
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if no vertex repeats on the path.
    pub fn is_simple(&self) -> bool {
        let mut sorted = self.vertices.clone();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| pair[0] != pair[1])
    }

    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{v}")?;
        }

        write!(f, ", {}", self.cost)
    }
}
