pub mod matrix;
pub mod visit_set;

pub use matrix::SquareMatrix;
pub use visit_set::VisitSet;
