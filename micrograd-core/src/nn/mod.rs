//! Neural-network building blocks on top of the scalar autograd.
//!
//! [`Neuron`] → [`Layer`] → [`Mlp`]. Modules own their parameter nodes for their whole lifetime;
//! the nodes created by a forward call belong to the caller and are dropped with the loss graph.

mod error;
mod init;
mod layer;
mod mlp;
mod neuron;

pub use error::NnError;
pub use init::InitRange;
pub use layer::{Layer, LayerOutput};
pub use mlp::Mlp;
pub use neuron::Neuron;

use crate::autograd::{ScalarNode, ValueRef};

/// Anything that owns trainable parameters.
pub trait Module {
    /// Every parameter node, flattened in a stable order (per unit: weights, then bias).
    ///
    /// The returned handles share the module's nodes, so writing `data` through them updates
    /// the module.
    fn parameters(&self) -> Vec<ValueRef>;

    /// Resets the gradient of every parameter to zero. Call before each backward pass.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
