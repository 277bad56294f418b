//! A single tanh unit.

use std::fmt;

use rand::Rng;

use super::init::{sample, InitRange};
use super::{Module, NnError};
use crate::autograd::ValueRef;

/// One unit: `tanh(b + Σ w_i x_i)` with a weight per input and a bias.
///
/// Weights are labeled `w0, w1, ...` and the bias `b`.
#[derive(Clone, Debug)]
pub struct Neuron {
    weights: Vec<ValueRef>,
    bias: ValueRef,
}

impl Neuron {
    /// Creates a unit with `nin` inputs, drawing every parameter uniformly from `init`.
    ///
    /// # Errors
    ///
    /// - [`NnError::InvalidArchitecture`] when `nin == 0`.
    /// - [`NnError::Init`] when `init` is not a valid range.
    pub fn new<R>(nin: usize, init: InitRange, rng: &mut R) -> Result<Self, NnError>
    where
        R: Rng + ?Sized,
    {
        if nin == 0 {
            return Err(NnError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let dist = init.distribution()?;
        let weights = (0..nin)
            .map(|i| sample(&dist, &mut *rng, format!("w{i}")))
            .collect();
        let bias = sample(&dist, &mut *rng, "b".to_string());
        Ok(Self { weights, bias })
    }

    /// Creates a unit from explicit parameter values.
    ///
    /// # Errors
    ///
    /// [`NnError::InvalidArchitecture`] when `weights` is empty.
    pub fn from_parts(weights: &[f64], bias: f64) -> Result<Self, NnError> {
        if weights.is_empty() {
            return Err(NnError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        Ok(Self {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| ValueRef::labeled(w, format!("w{i}")))
                .collect(),
            bias: ValueRef::labeled(bias, "b"),
        })
    }

    /// Number of inputs.
    #[must_use]
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn weights(&self) -> &[ValueRef] {
        &self.weights
    }

    #[must_use]
    pub fn bias(&self) -> &ValueRef {
        &self.bias
    }

    /// Forward pass. Inputs may be raw numbers or nodes from an earlier layer.
    ///
    /// # Errors
    ///
    /// [`NnError::InputWidth`] when `x.len() != self.nin()`.
    pub fn forward<X>(&self, x: &[X]) -> Result<ValueRef, NnError>
    where
        X: Into<ValueRef> + Clone,
    {
        if x.len() != self.nin() {
            return Err(NnError::InputWidth {
                expected: self.nin(),
                actual: x.len(),
            });
        }
        let act = self
            .weights
            .iter()
            .zip(x)
            .fold(self.bias.clone(), |acc, (wi, xi)| acc.add(wi.mul(xi.clone())));
        Ok(act.tanh())
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<ValueRef> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TanhNeuron({})", self.nin())
    }
}
