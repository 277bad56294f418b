//! Autograd: scalar computation graph with reverse-mode automatic differentiation.
//!
//! The graph is built during forward operations: every builder (see [`ops`] and the methods on
//! [`ValueRef`]) creates a new node that records its operands and its backward rule.
//! [`ScalarNode::backward`] orders the reachable graph with [`topological_order`], seeds the root
//! gradient with `1.0` and replays the backward rules from the root down to the leaves, so each
//! node's gradient is fully accumulated before it is pushed to its operands.
//!
//! Gradients accumulate: calling `backward` twice on the same graph without
//! [`ScalarNode::zero_grad`] in between adds the second result on top of the first.

mod error;
pub mod grad_check;
mod impls;
pub mod ops;
#[cfg(test)]
mod tests;

pub use error::AutogradError;
pub use grad_check::{check_gradients, GradCheckError};
pub use impls::{topological_order, Op, ValueRef};

/// A differentiable scalar node in the computation graph.
///
/// Implementations hold a single float value and a gradient, and participate in backward
/// propagation. Use [`ScalarNode::data`] for the forward value and [`ScalarNode::grad`] after
/// [`ScalarNode::backward`].
pub trait ScalarNode: Clone {
    /// Returns the forward pass value.
    fn data(&self) -> f64;

    /// Returns the gradient of the backward root with respect to this node.
    fn grad(&self) -> f64;

    /// Runs backpropagation from this node (e.g. the loss) to all leaves.
    fn backward(&self);

    /// Zeros the gradient at this node (e.g. after an optimizer step).
    fn zero_grad(&self);
}
