//! Named operation builders.
//!
//! Each builder coerces its operands with `Into<ValueRef>` (a raw `f64` becomes a fresh constant
//! leaf), creates one new node and records its backward rule. Nothing is differentiated until
//! [`ScalarNode::backward`](super::ScalarNode::backward) runs.

use super::{AutogradError, ValueRef};

/// `a + b`
#[must_use]
pub fn add(a: impl Into<ValueRef>, b: impl Into<ValueRef>) -> ValueRef {
    ValueRef::add(&a.into(), b)
}

/// `a * b`
#[must_use]
pub fn mul(a: impl Into<ValueRef>, b: impl Into<ValueRef>) -> ValueRef {
    ValueRef::mul(&a.into(), b)
}

/// `a ** exponent`; see [`ValueRef::pow`] for the domain rules.
///
/// # Errors
///
/// [`AutogradError::Domain`] for a non-finite exponent, a negative base with a non-integer
/// exponent, or a zero base with a negative exponent.
pub fn pow(a: impl Into<ValueRef>, exponent: f64) -> Result<ValueRef, AutogradError> {
    ValueRef::pow(&a.into(), exponent)
}

/// `a / b`, built as `a * b^-1`.
///
/// # Errors
///
/// [`AutogradError::Domain`] when `b` is zero.
pub fn div(a: impl Into<ValueRef>, b: impl Into<ValueRef>) -> Result<ValueRef, AutogradError> {
    ValueRef::div(&a.into(), b)
}

/// `-a`, built as `a * -1`.
#[must_use]
pub fn neg(a: impl Into<ValueRef>) -> ValueRef {
    ValueRef::neg(&a.into())
}

/// `a - b`, built as `a + (-b)`.
#[must_use]
pub fn sub(a: impl Into<ValueRef>, b: impl Into<ValueRef>) -> ValueRef {
    ValueRef::sub(&a.into(), b)
}

/// `e ** a`
#[must_use]
pub fn exp(a: impl Into<ValueRef>) -> ValueRef {
    ValueRef::exp(&a.into())
}

/// `tanh(a)`
#[must_use]
pub fn tanh(a: impl Into<ValueRef>) -> ValueRef {
    ValueRef::tanh(&a.into())
}
