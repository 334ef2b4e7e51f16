//! Graph capabilities and the basic types they are expressed in.

pub mod error;
pub mod marker;

mod base;
mod edge;

pub use base::*;
pub use edge::*;
