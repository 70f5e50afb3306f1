use frm_core::errors::{ErrorInfo, FrameError};
use frm_core::Tolerance;
use nalgebra::{DMatrix, SymmetricEigen};
use serde::{Deserialize, Serialize};

use crate::spd::spd_eigen;

/// Optimal frame bounds `(A, B)` of a frame operator.
///
/// `lower` is the smallest eigenvalue of `S`, `upper` the largest; both are
/// strictly positive for a valid frame. The bounds quantify the numerical
/// conditioning of reconstruction from frame coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameBounds {
    /// Lower frame bound `A`.
    pub lower: f64,
    /// Upper frame bound `B`.
    pub upper: f64,
}

impl FrameBounds {
    /// Ratio `B / A`, the spectral condition number of the frame operator.
    pub fn condition(&self) -> f64 {
        self.upper / self.lower
    }

    /// True when the frame is tight within epsilon (`A ≈ B`).
    pub fn is_tight(&self, tolerance: &Tolerance) -> bool {
        tolerance.approx_eq(self.lower, self.upper)
    }
}

/// Computes the frame bounds of a symmetric positive definite frame operator.
///
/// Fails with the singular-frame-operator error when the smallest eigenvalue
/// does not exceed epsilon — for a valid frame this signals a construction
/// defect or catastrophic ill-conditioning and must not be masked.
pub fn frame_bounds(
    frame_operator: &DMatrix<f64>,
    tolerance: &Tolerance,
) -> Result<FrameBounds, FrameError> {
    let (eigenvalues, _) = spd_eigen(frame_operator, tolerance)?;
    Ok(FrameBounds {
        lower: eigenvalues.min(),
        upper: eigenvalues.max(),
    })
}

/// Frame bounds of `S⁻¹` derived from the bounds of `S`.
///
/// The eigenvalues of the inverse are the reciprocals, so the bounds swap and
/// invert: `(1/B, 1/A)`.
pub fn inverse_bounds(bounds: &FrameBounds) -> FrameBounds {
    FrameBounds {
        lower: 1.0 / bounds.upper,
        upper: 1.0 / bounds.lower,
    }
}

/// Eigenvalues of a symmetric operator, sorted in descending order.
///
/// Unlike [`frame_bounds`] this does not require positive definiteness, so it
/// applies to the singular Gram matrix as well as to the frame operator.
pub fn operator_eigenvalues(
    operator: &DMatrix<f64>,
    tolerance: &Tolerance,
) -> Result<Vec<f64>, FrameError> {
    let tolerance = tolerance.sanitised();
    if !operator.is_square() {
        return Err(FrameError::DimensionMismatch(ErrorInfo::new(
            "non-square-operator",
            "eigenvalues are defined for square matrices only",
        )));
    }
    if !tolerance.is_symmetric(operator) {
        return Err(FrameError::Invariant(ErrorInfo::new(
            "asymmetric-operator",
            "the symmetric eigensolver requires a symmetric matrix",
        )));
    }
    let eigen = SymmetricEigen::new(operator.clone());
    let mut eigenvalues: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    Ok(eigenvalues)
}
