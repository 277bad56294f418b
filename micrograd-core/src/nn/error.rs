//! Neural-network module errors.

use thiserror::Error;

/// Errors produced when building or running [`Neuron`](super::Neuron), [`Layer`](super::Layer)
/// and [`Mlp`](super::Mlp).
///
/// # Variants
///
/// - **InputWidth**: a forward call received a different number of inputs than the module has
///   weights per unit.
///   *Recovery*: feed exactly `nin()` values.
/// - **InvalidArchitecture**: zero widths, no layers, or adjacent layers whose widths do not chain.
/// - **Init**: the initialization range cannot be sampled (e.g. `low >= high`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NnError {
    #[error("expected {expected} inputs, got {actual}")]
    InputWidth { expected: usize, actual: usize },

    #[error("invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("parameter init: {0}")]
    Init(String),
}
