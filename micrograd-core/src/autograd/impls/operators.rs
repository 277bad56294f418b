//! `std::ops` convenience layer over the named builders.
//!
//! Every binary operator is available for any mix of `ValueRef`, `&ValueRef` and `f64`, with the
//! raw number on either side. `/` can fail on a zero divisor, so its output is
//! `Result<ValueRef, AutogradError>`. `a ** k` has no operator; use [`ValueRef::pow`].

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::scalar::ValueRef;
use crate::autograd::AutogradError;

// -----------------------------------------------------------------------------
// std::ops — algebra: x + y, x - y, x * y, x / y, -x
// -----------------------------------------------------------------------------

macro_rules! binary_op {
    (@impl $trait:ident, $method:ident, $out:ty, $lhs:ty, $rhs:ty) => {
        impl $trait<$rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                ValueRef::$method(&self, rhs)
            }
        }
    };
    ($trait:ident, $method:ident, $out:ty) => {
        binary_op!(@impl $trait, $method, $out, ValueRef, ValueRef);
        binary_op!(@impl $trait, $method, $out, ValueRef, &ValueRef);
        binary_op!(@impl $trait, $method, $out, &ValueRef, ValueRef);
        binary_op!(@impl $trait, $method, $out, &ValueRef, &ValueRef);
        binary_op!(@impl $trait, $method, $out, ValueRef, f64);
        binary_op!(@impl $trait, $method, $out, &ValueRef, f64);

        impl $trait<ValueRef> for f64 {
            type Output = $out;

            fn $method(self, rhs: ValueRef) -> $out {
                ValueRef::$method(&ValueRef::new(self), rhs)
            }
        }

        impl $trait<&ValueRef> for f64 {
            type Output = $out;

            fn $method(self, rhs: &ValueRef) -> $out {
                ValueRef::$method(&ValueRef::new(self), rhs)
            }
        }
    };
}

binary_op!(Add, add, ValueRef);
binary_op!(Sub, sub, ValueRef);
binary_op!(Mul, mul, ValueRef);
binary_op!(Div, div, Result<ValueRef, AutogradError>);

impl Neg for ValueRef {
    type Output = ValueRef;

    fn neg(self) -> ValueRef {
        ValueRef::neg(&self)
    }
}

impl Neg for &ValueRef {
    type Output = ValueRef;

    fn neg(self) -> ValueRef {
        ValueRef::neg(self)
    }
}

// -----------------------------------------------------------------------------
// Sum — loss = preds.iter().sum()
// -----------------------------------------------------------------------------

impl Sum for ValueRef {
    /// Left fold with `add`. An empty iterator sums to a constant `0.0` leaf.
    fn sum<I: Iterator<Item = ValueRef>>(iter: I) -> ValueRef {
        iter.reduce(|acc, v| ValueRef::add(&acc, v))
            .unwrap_or_else(|| ValueRef::new(0.0))
    }
}

impl<'a> Sum<&'a ValueRef> for ValueRef {
    fn sum<I: Iterator<Item = &'a ValueRef>>(iter: I) -> ValueRef {
        iter.cloned().sum()
    }
}
