//! Squared-error training with plain gradient descent.
//!
//! One epoch: forward every sample, sum the squared errors into one loss node, zero the
//! parameter gradients, run backward from the loss, then move each parameter against its
//! gradient. The whole graph of an epoch is dropped before the next one starts.

mod error;

pub use error::TrainError;

use crate::autograd::{ScalarNode, ValueRef};
use crate::config::Config;
use crate::data::Dataset;
use crate::nn::{Mlp, Module};

/// `Σ (prediction - target)²`.
///
/// # Errors
///
/// [`TrainError::LengthMismatch`] for slices of different length, [`TrainError::EmptyBatch`] when
/// both are empty.
pub fn squared_error(predictions: &[ValueRef], targets: &[f64]) -> Result<ValueRef, TrainError> {
    if predictions.len() != targets.len() {
        return Err(TrainError::LengthMismatch {
            predictions: predictions.len(),
            targets: targets.len(),
        });
    }
    if predictions.is_empty() {
        return Err(TrainError::EmptyBatch);
    }
    let terms = predictions
        .iter()
        .zip(targets)
        .map(|(yp, &yt)| yp.sub(yt).pow(2.0))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(terms.into_iter().sum())
}

/// One gradient-descent step: `p.data -= learning_rate * p.grad` for every parameter.
pub fn sgd_step(params: &[ValueRef], learning_rate: f64) {
    for p in params {
        p.set_data(p.data() - learning_rate * p.grad());
    }
}

/// Full-batch trainer for an [`Mlp`] with a single output.
#[derive(Clone, Debug, PartialEq)]
pub struct Trainer {
    pub learning_rate: f64,
    pub epochs: usize,
    /// Log the loss every this many epochs (the first and last epochs are always logged).
    pub loss_log_every: usize,
}

impl Trainer {
    #[must_use]
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
            loss_log_every: 1,
        }
    }

    /// Trainer settings from a validated [`Config`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            learning_rate: config.learning_rate,
            epochs: config.epochs,
            loss_log_every: config.loss_log_every.max(1),
        }
    }

    /// Whether `epoch` (0-based) is one whose loss gets reported: the first, the last and every
    /// `loss_log_every`-th.
    #[must_use]
    pub fn should_log(&self, epoch: usize) -> bool {
        epoch == 0 || epoch + 1 == self.epochs || (epoch + 1) % self.loss_log_every.max(1) == 0
    }

    /// Forward pass over the whole dataset; returns the loss node.
    ///
    /// # Errors
    ///
    /// [`TrainError::Nn`] when a sample does not fit the model, [`TrainError::OutputWidth`] when the
    /// model has more than one output.
    pub fn loss(&self, model: &Mlp, data: &Dataset) -> Result<ValueRef, TrainError> {
        let predictions = data
            .samples()
            .iter()
            .map(|s| -> Result<ValueRef, TrainError> {
                let out = model.forward(&s.inputs)?;
                let width = out.len();
                out.single().ok_or(TrainError::OutputWidth(width))
            })
            .collect::<Result<Vec<_>, _>>()?;
        squared_error(&predictions, &data.targets())
    }

    /// Runs one epoch and returns the loss measured before the update.
    ///
    /// # Errors
    ///
    /// See [`Trainer::loss`].
    pub fn epoch(&self, model: &Mlp, data: &Dataset) -> Result<f64, TrainError> {
        let loss = self.loss(model, data)?;
        model.zero_grad();
        loss.backward();
        sgd_step(&model.parameters(), self.learning_rate);
        Ok(loss.data())
    }

    /// Trains for `self.epochs` epochs and returns the loss of every epoch.
    ///
    /// # Errors
    ///
    /// See [`Trainer::loss`].
    pub fn fit(&self, model: &Mlp, data: &Dataset) -> Result<Vec<f64>, TrainError> {
        self.fit_with(model, data, |_, _| {})
    }

    /// Like [`Trainer::fit`], calling `on_epoch(epoch, loss)` after every epoch.
    ///
    /// # Errors
    ///
    /// See [`Trainer::loss`].
    pub fn fit_with<F>(
        &self,
        model: &Mlp,
        data: &Dataset,
        mut on_epoch: F,
    ) -> Result<Vec<f64>, TrainError>
    where
        F: FnMut(usize, f64),
    {
        let mut losses = Vec::with_capacity(self.epochs);
        for epoch in 0..self.epochs {
            let loss = self.epoch(model, data)?;
            if self.should_log(epoch) {
                log::info!("epoch {:4} / {:4} | loss {:.6}", epoch + 1, self.epochs, loss);
            }
            on_epoch(epoch, loss);
            losses.push(loss);
        }
        Ok(losses)
    }
}
