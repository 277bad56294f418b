//! Types for training data: [`Sample`] (inputs plus a scalar target) and [`Dataset`].
//!
//! Validation at construction ensures a dataset is non-empty and every sample has the same
//! input width, so a model built for `dataset.input_width()` accepts every sample.

use super::DataError;

/// One training example.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub target: f64,
}

impl Sample {
    #[must_use]
    pub fn new(inputs: Vec<f64>, target: f64) -> Self {
        Self { inputs, target }
    }
}

/// A non-empty list of [`Sample`]s sharing one input width.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset(Vec<Sample>);

impl Dataset {
    /// Builds a [`Dataset`], checking it is non-empty and uniform in width.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyFile`] when `samples` is empty.
    /// - [`DataError::WidthMismatch`] when a sample's input width differs from the first one.
    pub fn new(samples: Vec<Sample>) -> Result<Self, DataError> {
        let Some(first) = samples.first() else {
            return Err(DataError::EmptyFile);
        };
        let expected = first.inputs.len();
        if let Some((index, bad)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| s.inputs.len() != expected)
        {
            return Err(DataError::WidthMismatch {
                index,
                expected,
                actual: bad.inputs.len(),
            });
        }
        Ok(Dataset(samples))
    }

    /// The four 3-feature examples used by the demo binary, targets `[1, -1, -1, 1]`.
    #[must_use]
    pub fn toy() -> Self {
        Dataset(vec![
            Sample::new(vec![2.0, 3.0, -1.0], 1.0),
            Sample::new(vec![1.0, -3.0, 2.0], -1.0),
            Sample::new(vec![-4.0, -4.0, -3.0], -1.0),
            Sample::new(vec![1.0, 3.0, 5.0], 1.0),
        ])
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no samples (should not happen for a valid [`Dataset`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of inputs per sample.
    #[must_use]
    pub fn input_width(&self) -> usize {
        self.0.first().map_or(0, |s| s.inputs.len())
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.0
    }

    /// Targets in sample order.
    #[must_use]
    pub fn targets(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.target).collect()
    }
}
