//! Path searching algorithms.
//!
//! * [`DeepSearcher`] enumerates all simple paths between two vertices.
//! * [`ShortestPathSearcher`] precomputes shortest paths between all pairs of
//!   vertices.
//!
//! Both work on any storage implementing [`Graph`](crate::core::Graph) and
//! report paths as [`Path`].

pub mod deep_search;
pub mod shortest_paths;

mod path;

pub use deep_search::DeepSearcher;
pub use path::Path;
pub use shortest_paths::ShortestPathSearcher;
