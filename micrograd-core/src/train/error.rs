//! Training errors.

use thiserror::Error;

use crate::autograd::AutogradError;
use crate::nn::NnError;

/// Errors produced by [`Trainer`](super::Trainer) and the loss helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainError {
    /// Predictions and targets differ in length.
    #[error("{predictions} predictions but {targets} targets")]
    LengthMismatch { predictions: usize, targets: usize },

    /// Nothing to compute a loss over.
    #[error("cannot compute a loss over zero samples")]
    EmptyBatch,

    /// The model produces more than one value per sample; the squared-error loss needs one.
    #[error("model must produce a single output per sample, got {0}")]
    OutputWidth(usize),

    #[error(transparent)]
    Nn(#[from] NnError),

    #[error(transparent)]
    Autograd(#[from] AutogradError),
}
