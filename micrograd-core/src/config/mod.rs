//! Configuration for the model, the training run and the dataset location.
//!
//! Load from environment via [`from_env`] and validate with [`Config::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use std::path::PathBuf;

use constants::{
    DEFAULT_EPOCHS, DEFAULT_INIT_HIGH, DEFAULT_INIT_LOW, DEFAULT_LAYERS, DEFAULT_LEARNING_RATE,
    DEFAULT_LOSS_LOG_EVERY, DEFAULT_SEED,
};

pub use builder::{env_key, env_list, env_parsed, env_string, from_env};
pub use error::ConfigError;

use crate::nn::InitRange;

/// Central configuration for a training run.
///
/// Use [`from_env`] to build from environment variables and [`Config::validate`] before use.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Seed for parameter initialization (reproducibility).
    pub seed: u64,
    /// Number of passes over the dataset.
    pub epochs: usize,
    /// SGD step size.
    pub learning_rate: f64,
    /// Output width of each layer; the input width comes from the dataset.
    pub layers: Vec<usize>,
    /// Lower bound of the uniform parameter init.
    pub init_low: f64,
    /// Upper bound of the uniform parameter init.
    pub init_high: f64,
    /// Log loss every this many epochs (and at the first and last).
    pub loss_log_every: usize,
    /// Sample file; `None` trains on the built-in toy dataset.
    pub data_path: Option<PathBuf>,
}

impl Default for Config {
    /// Returns default configuration: the `[4, 4, 1]` network, 10 epochs at learning rate 0.1.
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            epochs: DEFAULT_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
            layers: DEFAULT_LAYERS.to_vec(),
            init_low: DEFAULT_INIT_LOW,
            init_high: DEFAULT_INIT_HIGH,
            loss_log_every: DEFAULT_LOSS_LOG_EVERY,
            data_path: None,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.epochs == 0 {
            return Err(ConfigError::Validation(
                "epochs must be greater than 0".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::Validation(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.layers.is_empty() {
            return Err(ConfigError::Validation(
                "layers must name at least one layer width".to_string(),
            ));
        }
        if self.layers.contains(&0) {
            return Err(ConfigError::Validation(format!(
                "layer widths must be greater than 0, got {:?}",
                self.layers
            )));
        }
        if !(self.init_low.is_finite() && self.init_high.is_finite())
            || self.init_low >= self.init_high
        {
            return Err(ConfigError::Validation(format!(
                "init range [{}, {}] must be finite with low < high",
                self.init_low, self.init_high
            )));
        }
        if self.loss_log_every == 0 {
            return Err(ConfigError::Validation(
                "loss_log_every must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parameter init range.
    #[must_use]
    pub fn init_range(&self) -> InitRange {
        InitRange::new(self.init_low, self.init_high)
    }
}
