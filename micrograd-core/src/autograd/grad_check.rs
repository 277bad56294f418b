//! Finite-difference gradient checking.
//!
//! Compares the gradients produced by [`ScalarNode::backward`] with central differences
//! `(f(x + h) - f(x - h)) / 2h` evaluated on freshly built graphs.

use thiserror::Error;

use super::{AutogradError, ScalarNode, ValueRef};

/// Step used for the central difference.
pub const DEFAULT_EPSILON: f64 = 1e-6;
/// Maximum absolute difference accepted between analytic and numeric gradients.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Errors produced by [`check_gradients`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradCheckError {
    #[error("gradient mismatch for input {index}: analytic {analytic} vs numeric {numeric}")]
    Mismatch {
        index: usize,
        analytic: f64,
        numeric: f64,
    },
    #[error("gradient for input {index} is not finite (analytic {analytic}, numeric {numeric})")]
    NonFinite {
        index: usize,
        analytic: f64,
        numeric: f64,
    },
    #[error("function evaluation failed: {0}")]
    Forward(#[from] AutogradError),
}

/// Checks the analytic gradient of `f` at `inputs` against central differences.
///
/// `f` receives one fresh leaf per input and must return the scalar output node. On success the
/// analytic gradients are returned, one per input.
///
/// # Errors
///
/// - [`GradCheckError::Mismatch`] when `|analytic - numeric| > tolerance` for some input.
/// - [`GradCheckError::NonFinite`] when either estimate is NaN or infinite.
/// - [`GradCheckError::Forward`] when `f` fails at `inputs` or at a perturbed point.
pub fn check_gradients<F>(
    f: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[ValueRef]) -> Result<ValueRef, AutogradError>,
{
    let leaves = leaves_at(inputs);
    f(&leaves)?.backward();
    let analytic: Vec<f64> = leaves.iter().map(ScalarNode::grad).collect();

    let eval = |point: &[f64]| -> Result<f64, AutogradError> { Ok(f(&leaves_at(point))?.data()) };

    let mut point = inputs.to_vec();
    for (index, &analytic) in analytic.iter().enumerate() {
        let x = point[index];
        point[index] = x + epsilon;
        let plus = eval(&point)?;
        point[index] = x - epsilon;
        let minus = eval(&point)?;
        point[index] = x;

        let numeric = (plus - minus) / (2.0 * epsilon);
        if !numeric.is_finite() || !analytic.is_finite() {
            return Err(GradCheckError::NonFinite {
                index,
                analytic,
                numeric,
            });
        }
        if (analytic - numeric).abs() > tolerance {
            return Err(GradCheckError::Mismatch {
                index,
                analytic,
                numeric,
            });
        }
    }
    Ok(analytic)
}

fn leaves_at(point: &[f64]) -> Vec<ValueRef> {
    point.iter().map(|&x| ValueRef::new(x)).collect()
}
