//! Training data: the built-in toy dataset and loading samples from a file.
//!
//! This module defines the **trait** ([`DataLoader`]), **models** ([`Sample`], [`Dataset`]), and **error** ([`DataError`]).
//! Implementations (e.g. [`PathLoader`] for file paths) are in the `impls` submodule.

mod error;
mod impls;
mod types;

pub use error::DataError;
pub use impls::{load_from_path, parse_samples, PathLoader};
pub use types::{Dataset, Sample};

/// Trait for loading a [`Dataset`].
pub trait DataLoader {
    /// Loads data. Returns a [`Dataset`] or a [`DataError`].
    fn load(&self) -> Result<Dataset, DataError>;
}
