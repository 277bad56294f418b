//! A layer of units sharing the same input.

use std::fmt;

use rand::Rng;

use super::{InitRange, Module, Neuron, NnError};
use crate::autograd::ValueRef;

/// Output of a [`Layer`] forward call.
///
/// A layer with one unit yields [`LayerOutput::Single`]; wider layers yield every unit's output,
/// in unit order.
#[derive(Clone, Debug)]
pub enum LayerOutput {
    Single(ValueRef),
    Many(Vec<ValueRef>),
}

impl LayerOutput {
    /// Flattens into the ordered list of output nodes.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValueRef> {
        match self {
            LayerOutput::Single(v) => vec![v],
            LayerOutput::Many(vs) => vs,
        }
    }

    /// The single output node, if this came from a one-unit layer.
    #[must_use]
    pub fn single(self) -> Option<ValueRef> {
        match self {
            LayerOutput::Single(v) => Some(v),
            LayerOutput::Many(_) => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            LayerOutput::Single(_) => 1,
            LayerOutput::Many(vs) => vs.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `nout` units, all reading the same `nin` inputs.
#[derive(Clone, Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `nout` randomly initialized units with `nin` inputs each.
    ///
    /// # Errors
    ///
    /// [`NnError::InvalidArchitecture`] when either width is zero; [`NnError::Init`] for a bad range.
    pub fn new<R>(nin: usize, nout: usize, init: InitRange, rng: &mut R) -> Result<Self, NnError>
    where
        R: Rng + ?Sized,
    {
        if nout == 0 {
            return Err(NnError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { neurons })
    }

    /// Creates a layer from existing units, which must all have the same input width.
    ///
    /// # Errors
    ///
    /// [`NnError::InvalidArchitecture`] when `neurons` is empty or widths differ.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NnError> {
        let Some(first) = neurons.first() else {
            return Err(NnError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        };
        let nin = first.nin();
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(NnError::InvalidArchitecture(format!(
                "neurons in a layer must share their input width ({nin} vs {})",
                bad.nin()
            )));
        }
        Ok(Self { neurons })
    }

    /// Input width.
    #[must_use]
    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    /// Number of units, i.e. output width.
    #[must_use]
    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    #[must_use]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Applies every unit to the same input.
    ///
    /// # Errors
    ///
    /// [`NnError::InputWidth`] when `x.len() != self.nin()`.
    pub fn forward<X>(&self, x: &[X]) -> Result<LayerOutput, NnError>
    where
        X: Into<ValueRef> + Clone,
    {
        // Coerce once so raw inputs become one shared constant per position.
        let x: Vec<ValueRef> = x.iter().cloned().map(Into::into).collect();
        let mut outs = self
            .neurons
            .iter()
            .map(|n| n.forward(&x))
            .collect::<Result<Vec<_>, _>>()?;
        if outs.len() == 1 {
            if let Some(out) = outs.pop() {
                return Ok(LayerOutput::Single(out));
            }
        }
        Ok(LayerOutput::Many(outs))
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<ValueRef> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units: Vec<String> = self.neurons.iter().map(ToString::to_string).collect();
        write!(f, "Layer of [{}]", units.join(", "))
    }
}
