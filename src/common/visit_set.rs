use fixedbitset::FixedBitSet;

use crate::core::VertexId;

pub trait VisitSet {
    /// Marks the vertex as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, id: VertexId) -> bool;
    fn is_visited(&self, id: VertexId) -> bool;
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, id: VertexId) -> bool {
        if self.len() <= id {
            self.grow(id + 1);
        }
        !self.put(id)
    }

    fn is_visited(&self, id: VertexId) -> bool {
        self.contains(id)
    }
}
