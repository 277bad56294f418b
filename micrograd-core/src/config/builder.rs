//! Build [`Config`] from environment variables.
//!
//! Uses [`env_string`], [`env_parsed`] and [`env_list`] to read env vars with a single place for
//! key names (see the `constants` submodule) and typed errors ([`ConfigError`]).

use std::path::PathBuf;

use super::constants::{
    ENV_DATA_PATH, ENV_EPOCHS, ENV_INIT_HIGH, ENV_INIT_LOW, ENV_LAYERS, ENV_LEARNING_RATE,
    ENV_LOSS_LOG_EVERY, ENV_PREFIX, ENV_SEED,
};
use super::Config;
use super::ConfigError;

/// Returns the full environment variable key for a given suffix (e.g. `SEED` → `MICROGRAD_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if unset.
/// Returns `Err(ConfigError::EnvVar)` if the variable is set but invalid (e.g. not Unicode).
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails (e.g. `SEED=abc` for `u64`).
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.trim().parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            message: e.to_string(),
            value: s,
        }),
    }
}

/// Reads a comma-separated list (e.g. `MICROGRAD_LAYERS=4,4,1`).
///
/// Blank items are rejected, so `4,,1` is a parse error rather than `[4, 1]`.
pub fn env_list<T>(key: &str) -> Result<Option<Vec<T>>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    let parse_error = |message: String| ConfigError::Parse {
        key: key.to_string(),
        value: s.clone(),
        message,
    };
    s.split(',')
        .map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return Err(parse_error("empty list item".to_string()));
            }
            item.parse().map_err(|e: T::Err| parse_error(e.to_string()))
        })
        .collect::<Result<Vec<T>, _>>()
        .map(Some)
}

/// Builds [`Config`] from environment variables, falling back to [`Config::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse (e.g. `MICROGRAD_SEED=abc`).
/// The result is not validated; call [`Config::validate`] before use.
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let epochs = env_parsed::<usize>(&env_key(ENV_EPOCHS))?.unwrap_or(default.epochs);
    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let layers = env_list::<usize>(&env_key(ENV_LAYERS))?.unwrap_or(default.layers);
    let init_low = env_parsed::<f64>(&env_key(ENV_INIT_LOW))?.unwrap_or(default.init_low);
    let init_high = env_parsed::<f64>(&env_key(ENV_INIT_HIGH))?.unwrap_or(default.init_high);
    let loss_log_every =
        env_parsed::<usize>(&env_key(ENV_LOSS_LOG_EVERY))?.unwrap_or(default.loss_log_every);
    let data_path = env_string(&env_key(ENV_DATA_PATH))?
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .or(default.data_path);

    Ok(Config {
        seed,
        epochs,
        learning_rate,
        layers,
        init_low,
        init_high,
        loss_log_every,
        data_path,
    })
}
