use frm_core::errors::{ErrorInfo, FrameError};
use frm_core::Tolerance;
use nalgebra::{DMatrix, DVector, SymmetricEigen};

/// Eigendecomposition of a symmetric positive definite matrix.
///
/// Returns `(eigenvalues, eigenvectors)` with eigenvalues unsorted, as
/// produced by the symmetric eigensolver. Fails when the matrix is not
/// square, not symmetric within tolerance, or when the smallest eigenvalue
/// does not clear the tolerance; the failure is surfaced, never clamped.
pub(crate) fn spd_eigen(
    matrix: &DMatrix<f64>,
    tolerance: &Tolerance,
) -> Result<(DVector<f64>, DMatrix<f64>), FrameError> {
    let tolerance = tolerance.sanitised();
    if !matrix.is_square() || matrix.nrows() == 0 {
        return Err(FrameError::DimensionMismatch(
            ErrorInfo::new(
                "non-square-operator",
                "spectral decomposition requires a non-empty square matrix",
            )
            .with_context("nrows", matrix.nrows().to_string())
            .with_context("ncols", matrix.ncols().to_string()),
        ));
    }
    if !tolerance.is_symmetric(matrix) {
        return Err(FrameError::Invariant(ErrorInfo::new(
            "asymmetric-operator",
            "spectral decomposition requires a symmetric matrix",
        )));
    }
    let eigen = SymmetricEigen::new(matrix.clone());
    let min_eigenvalue = eigen.eigenvalues.min();
    if min_eigenvalue <= tolerance.epsilon {
        return Err(FrameError::SingularFrameOperator(
            ErrorInfo::new(
                "singular-frame-operator",
                "frame operator is not positive definite within tolerance",
            )
            .with_context("min_eigenvalue", format!("{min_eigenvalue:e}"))
            .with_context("epsilon", format!("{:e}", tolerance.epsilon))
            .with_hint("a valid frame never reaches this; check construction or conditioning"),
        ));
    }
    Ok((eigen.eigenvalues, eigen.eigenvectors))
}

/// Inverse of a symmetric positive definite matrix via `S = VΛVᵗ`.
pub fn invert_spd(matrix: &DMatrix<f64>, tolerance: &Tolerance) -> Result<DMatrix<f64>, FrameError> {
    let (eigenvalues, eigenvectors) = spd_eigen(matrix, tolerance)?;
    Ok(reconstruct(&eigenvalues.map(|value| 1.0 / value), &eigenvectors))
}

/// Principal inverse square root of a symmetric positive definite matrix.
///
/// `S^{-1/2} = VΛ^{-1/2}Vᵗ`; the result is itself symmetric positive
/// definite.
pub fn inverse_sqrt_spd(
    matrix: &DMatrix<f64>,
    tolerance: &Tolerance,
) -> Result<DMatrix<f64>, FrameError> {
    let (eigenvalues, eigenvectors) = spd_eigen(matrix, tolerance)?;
    Ok(reconstruct(
        &eigenvalues.map(|value| 1.0 / value.sqrt()),
        &eigenvectors,
    ))
}

fn reconstruct(spectrum: &DVector<f64>, eigenvectors: &DMatrix<f64>) -> DMatrix<f64> {
    eigenvectors * DMatrix::from_diagonal(spectrum) * eigenvectors.transpose()
}
