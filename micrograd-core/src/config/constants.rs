//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.

/// Environment variable prefix (e.g. `MICROGRAD_EPOCHS`).
pub(crate) const ENV_PREFIX: &str = "MICROGRAD_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_EPOCHS: &str = "EPOCHS";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_LAYERS: &str = "LAYERS";
pub(crate) const ENV_INIT_LOW: &str = "INIT_LOW";
pub(crate) const ENV_INIT_HIGH: &str = "INIT_HIGH";
pub(crate) const ENV_LOSS_LOG_EVERY: &str = "LOSS_LOG_EVERY";
pub(crate) const ENV_DATA_PATH: &str = "DATA_PATH";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) const DEFAULT_EPOCHS: usize = 10;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub(crate) const DEFAULT_LAYERS: [usize; 3] = [4, 4, 1];
pub(crate) const DEFAULT_INIT_LOW: f64 = -1.0;
pub(crate) const DEFAULT_INIT_HIGH: f64 = 1.0;
pub(crate) const DEFAULT_LOSS_LOG_EVERY: usize = 1;
