//! The single configurable epsilon and its comparison helpers.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Default absolute tolerance applied to every invariant check.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Numerical tolerance threaded through every equality and invariant check.
///
/// A single epsilon governs rank decisions, symmetry checks, duality
/// residuals, positive-definiteness thresholds and the redundancy decision
/// rule. Callers override it per call; nothing in the engine hard-codes a
/// comparison threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance for scalar and elementwise comparisons.
    pub epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Tolerance {
    /// Creates a tolerance with the provided epsilon.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Ensures the configuration is well-formed and returns a sanitised copy.
    pub fn sanitised(&self) -> Self {
        Self {
            epsilon: self.epsilon.abs().max(f64::EPSILON),
        }
    }

    /// Returns true when the two scalars agree within epsilon.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }

    /// Largest absolute elementwise difference between two matrices.
    ///
    /// Shapes must agree; callers validate before comparing.
    pub fn max_abs_diff(a: &DMatrix<f64>, b: &DMatrix<f64>) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    /// Returns true when the matrix equals its transpose within epsilon.
    pub fn is_symmetric(&self, matrix: &DMatrix<f64>) -> bool {
        if !matrix.is_square() {
            return false;
        }
        Self::max_abs_diff(matrix, &matrix.transpose()) <= self.epsilon
    }

    /// Returns true when the matrix equals the identity within epsilon.
    pub fn is_identity(&self, matrix: &DMatrix<f64>) -> bool {
        if !matrix.is_square() {
            return false;
        }
        let identity = DMatrix::<f64>::identity(matrix.nrows(), matrix.ncols());
        Self::max_abs_diff(matrix, &identity) <= self.epsilon
    }
}
