//! Errors produced when loading or validating training samples.

use thiserror::Error;

/// Errors produced by the data loading module.
///
/// # Variants
///
/// - **Io**: Failed to read the file (e.g. file not found, permission denied, invalid UTF-8).
///   *When*: Opening or reading the path in [`PathLoader`](super::PathLoader) or [`load_from_path`](super::load_from_path).
///   *Recovery*: Ensure the path exists, is readable, and contains valid UTF-8; check the source for details.
///
/// - **EmptyFile**: The input yields no samples (no lines, or only blank/comment lines).
///   *Recovery*: Provide at least one sample line.
///
/// - **Parse**: A field on a line is not a number, or the line has fewer than two fields.
///   *Recovery*: Fix the line; every line is `x1 x2 ... target` (commas or whitespace).
///
/// - **WidthMismatch**: A sample has a different number of inputs than the first one.
///   *Recovery*: Make every line carry the same number of fields.
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error while reading the input file.
    #[error("data io: {0}")]
    Io(#[from] std::io::Error),

    /// The input contains no samples.
    #[error("data: input is empty")]
    EmptyFile,

    /// Malformed sample line (1-based line number).
    #[error("data: line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Sample input width differs from the rest of the dataset.
    #[error("data: sample {index} has {actual} inputs, expected {expected}")]
    WidthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}
