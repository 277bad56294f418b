//! Parameter initialization.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::NnError;
use crate::autograd::ValueRef;

/// Closed range `[low, high]` that weights and biases are drawn from uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitRange {
    pub low: f64,
    pub high: f64,
}

impl Default for InitRange {
    fn default() -> Self {
        Self {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl InitRange {
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Builds the sampling distribution.
    ///
    /// # Errors
    ///
    /// [`NnError::Init`] when the bounds are not finite or `low >= high`.
    pub fn distribution(&self) -> Result<Uniform<f64>, NnError> {
        if !(self.low < self.high) {
            return Err(NnError::Init(format!(
                "low ({}) must be less than high ({})",
                self.low, self.high
            )));
        }
        Uniform::new_inclusive(self.low, self.high).map_err(|e| NnError::Init(e.to_string()))
    }
}

/// Draws a labeled parameter leaf.
pub(crate) fn sample<R>(dist: &Uniform<f64>, rng: &mut R, label: String) -> ValueRef
where
    R: Rng + ?Sized,
{
    ValueRef::labeled(dist.sample(rng), label)
}
