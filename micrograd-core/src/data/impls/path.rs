//! [`DataLoader`](super::super::DataLoader) implementation that reads samples from a text file.
//!
//! Format: one sample per line, numbers separated by commas and/or whitespace, the last number
//! being the target. Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use super::super::{DataError, DataLoader, Dataset, Sample};

/// Loads samples from a file path.
#[derive(Clone, Debug)]
pub struct PathLoader<P>(pub P);

impl<P> PathLoader<P>
where
    P: AsRef<Path>,
{
    /// Creates a loader for the given path.
    #[must_use]
    pub fn new(path: P) -> Self {
        PathLoader(path)
    }
}

impl<P> DataLoader for PathLoader<P>
where
    P: AsRef<Path>,
{
    fn load(&self) -> Result<Dataset, DataError> {
        let content = fs::read_to_string(self.0.as_ref())?;
        let dataset = parse_samples(&content)?;
        log::debug!(
            "loaded {} samples of width {} from {}",
            dataset.len(),
            dataset.input_width(),
            self.0.as_ref().display()
        );
        Ok(dataset)
    }
}

/// Parses the sample text format described in the module docs.
///
/// # Errors
///
/// - [`DataError::Parse`] for a non-numeric field or a line with fewer than two fields.
/// - [`DataError::EmptyFile`] when no sample lines remain.
/// - [`DataError::WidthMismatch`] when lines disagree on the number of inputs.
pub fn parse_samples(content: &str) -> Result<Dataset, DataError> {
    let mut samples = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .map(|f| {
                f.parse::<f64>().map_err(|e| DataError::Parse {
                    line: i + 1,
                    message: format!("{f:?}: {e}"),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        let target = match fields.pop() {
            Some(target) if !fields.is_empty() => target,
            _ => {
                return Err(DataError::Parse {
                    line: i + 1,
                    message: "expected at least one input and a target".to_string(),
                })
            }
        };
        samples.push(Sample::new(fields, target));
    }
    Dataset::new(samples)
}

/// Convenience: load a dataset from a path using [`PathLoader`].
///
/// # Errors
///
/// - [`DataError::Io`] when the path cannot be read or content is not valid UTF-8.
/// - Any error of [`parse_samples`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Dataset, DataError> {
    PathLoader::new(path).load()
}
