//! Multi-layer perceptron: layers applied in sequence.

use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{InitRange, Layer, LayerOutput, Module, NnError};
use crate::autograd::ValueRef;

/// A stack of [`Layer`]s where each layer's output width is the next layer's input width.
#[derive(Clone, Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP with `nin` inputs and one layer per entry of `nouts`.
    ///
    /// `Mlp::new(3, &[4, 4, 1], ..)` has layers of widths 3→4, 4→4 and 4→1.
    ///
    /// # Errors
    ///
    /// [`NnError::InvalidArchitecture`] for an empty `nouts` or a zero width.
    pub fn new<R>(nin: usize, nouts: &[usize], init: InitRange, rng: &mut R) -> Result<Self, NnError>
    where
        R: Rng + ?Sized,
    {
        if nouts.is_empty() {
            return Err(NnError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let layers = sizes
            .windows(2)
            .map(|w| Layer::new(w[0], w[1], init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("built MLP {sizes:?}");
        Ok(Self { layers })
    }

    /// Same as [`Mlp::new`] with a `StdRng` seeded from `seed`; identical seeds give identical
    /// parameters.
    ///
    /// # Errors
    ///
    /// See [`Mlp::new`].
    pub fn seeded(nin: usize, nouts: &[usize], init: InitRange, seed: u64) -> Result<Self, NnError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(nin, nouts, init, &mut rng)
    }

    /// Assembles an MLP from existing layers.
    ///
    /// # Errors
    ///
    /// [`NnError::InvalidArchitecture`] when `layers` is empty or adjacent widths do not chain.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, NnError> {
        if layers.is_empty() {
            return Err(NnError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].nout() != pair[1].nin() {
                return Err(NnError::InvalidArchitecture(format!(
                    "layer {i} outputs {} values but layer {} expects {}",
                    pair[0].nout(),
                    i + 1,
                    pair[1].nin()
                )));
            }
        }
        Ok(Self { layers })
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Input width of the first layer.
    #[must_use]
    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    /// Output width of the last layer.
    #[must_use]
    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    /// Feeds `x` through every layer in order.
    ///
    /// # Errors
    ///
    /// [`NnError::InputWidth`] when `x.len() != self.nin()`.
    pub fn forward<X>(&self, x: &[X]) -> Result<LayerOutput, NnError>
    where
        X: Into<ValueRef> + Clone,
    {
        let Some((last, hidden)) = self.layers.split_last() else {
            return Err(NnError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        };
        let mut x: Vec<ValueRef> = x.iter().cloned().map(Into::into).collect();
        for layer in hidden {
            x = layer.forward(&x)?.into_vec();
        }
        last.forward(&x)
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<ValueRef> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(ToString::to_string).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}
