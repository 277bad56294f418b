//! Scalar node implementation and its operator overloads.

mod operators;
pub(crate) mod scalar;
mod topo;

pub use scalar::{Op, ValueRef};
pub use topo::topological_order;
