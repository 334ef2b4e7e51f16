//! Reading graphs from text and dumping them back.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{
//!     io::{read_graph_from_str, ReadOptions},
//!     storage::DenseGraph,
//! };
//!
//! let mut graph = DenseGraph::new_directed(3);
//! let options = ReadOptions::new().extra_chars(['[', ']']);
//!
//! read_graph_from_str(&mut graph, "[0 5 0]\n[0 0 1]\n[0 0 0]\n", &options);
//!
//! assert_eq!(graph.to_string(), "0: (1, $5); \n1: (2, $1); \n2: \n");
//! ```

pub mod dump;
pub mod read;
pub mod scan;

pub use dump::AdjacencyDump;
pub use read::{read_graph, read_graph_from_str, ReadOptions};
pub use scan::ScanEdges;
