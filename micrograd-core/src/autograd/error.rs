//! Autograd errors.
//!
//! Builders that can fail return [`AutogradError`] before any node is created, so a failed
//! operation never leaves a half-built node reachable from the graph.

use thiserror::Error;

/// Errors produced by the operation builders.
///
/// # Variants
///
/// - **Domain**: `power` was asked for a value that is undefined over the reals (a negative base
///   with a non-integer exponent, a zero base with a negative exponent, or a non-finite exponent).
///   Division by a zero-valued node lands here too, since `a / b` is `a * b^-1`.
///   *When*: In [`ValueRef::pow`](super::ValueRef::pow) / [`ops::pow`](super::ops::pow) and the
///   `div` builders.
///   *Recovery*: Keep the base non-negative (e.g. square it first), use an integer exponent, or
///   guard the divisor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AutogradError {
    /// `base ** exponent` has no real value.
    #[error("power is undefined over the reals for base {base} and exponent {exponent}")]
    Domain {
        /// Forward value of the base node.
        base: f64,
        /// Requested exponent.
        exponent: f64,
    },
}
