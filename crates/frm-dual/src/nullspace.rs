use frm_core::errors::{ErrorInfo, FrameError};
use frm_core::{validate_index_set, Tolerance};
use frm_op::FrameOperators;
use nalgebra::{DMatrix, DVector, SVD};

use crate::{ensure_duality, DualFrame};

/// Extracts an orthonormal basis of the null space of the synthesis operator.
///
/// A vector `δ` satisfies `Synthesis·δ = 0` exactly when `Gram·δ = 0`, since
/// `⟨δ, Gram δ⟩ = ‖Synthesis δ‖²`. The Gram matrix is square, so its singular
/// value decomposition exposes the full set of right singular vectors; the
/// directions with singular value below the relative threshold span the null
/// space. Returns the basis as the columns of an `m x (m - n)` matrix.
///
/// Fails with the no-null-space error when `m = n`, the only case where the
/// null space is trivial.
pub fn synthesis_null_basis(
    operators: &FrameOperators,
    tolerance: &Tolerance,
) -> Result<DMatrix<f64>, FrameError> {
    let tolerance = tolerance.sanitised();
    let num_vectors = operators.num_vectors();
    let dim = operators.dim();
    if num_vectors == dim {
        return Err(FrameError::NoNullSpace(
            ErrorInfo::new(
                "no-null-space",
                "a basis has a trivial synthesis null space; perturbed duals need m > n",
            )
            .with_context("num_vectors", num_vectors.to_string())
            .with_context("dim", dim.to_string()),
        ));
    }

    let svd = SVD::new(operators.gram().clone(), false, true);
    let v_t = svd.v_t.ok_or_else(|| {
        FrameError::Invariant(ErrorInfo::new(
            "svd-missing-factor",
            "singular value decomposition did not return right singular vectors",
        ))
    })?;
    let sigma_max = svd.singular_values.max();
    let threshold = tolerance.epsilon * sigma_max.max(1.0);

    let mut basis: Vec<DVector<f64>> = Vec::new();
    for (index, sigma) in svd.singular_values.iter().enumerate() {
        if *sigma <= threshold {
            basis.push(v_t.row(index).transpose());
        }
    }
    let expected = num_vectors - dim;
    if basis.len() != expected {
        return Err(FrameError::Invariant(
            ErrorInfo::new(
                "null-space-dimension",
                "extracted null space dimension disagrees with m - n",
            )
            .with_context("expected", expected.to_string())
            .with_context("actual", basis.len().to_string()),
        ));
    }
    Ok(DMatrix::from_columns(&basis))
}

/// Adds a synthesis-null-space direction to the selected rows of a dual.
///
/// `direction` must lie in the null space of the synthesis operator (checked
/// within epsilon); such components are annihilated in the duality identity,
/// so the perturbed operator remains a valid dual. Its Frobenius norm is at
/// least the canonical dual's, strictly greater for a nonzero direction,
/// because null-space rows are orthogonal to the canonical rows.
pub fn perturbed_dual(
    operators: &FrameOperators,
    dual: &DualFrame,
    direction: &DVector<f64>,
    rows: &[usize],
    tolerance: &Tolerance,
) -> Result<DualFrame, FrameError> {
    let tolerance = tolerance.sanitised();
    let num_vectors = operators.num_vectors();
    let dim = operators.dim();
    if dual.num_vectors() != num_vectors || dual.dim() != dim {
        return Err(FrameError::DimensionMismatch(ErrorInfo::new(
            "dual-shape",
            "dual operator shape does not match the frame operators",
        )));
    }
    if direction.len() != num_vectors {
        return Err(FrameError::DimensionMismatch(
            ErrorInfo::new("direction-length", "perturbation direction must have m entries")
                .with_context("expected", num_vectors.to_string())
                .with_context("actual", direction.len().to_string()),
        ));
    }
    validate_index_set(rows, dim)?;

    let image = operators.synthesis() * direction;
    let deviation = image.amax();
    if deviation > tolerance.epsilon {
        return Err(FrameError::Invariant(
            ErrorInfo::new(
                "outside-null-space",
                "perturbation direction is not annihilated by the synthesis operator",
            )
            .with_context("deviation", format!("{deviation:e}")),
        ));
    }

    let mut synthesis = dual.synthesis().clone();
    for &row in rows {
        for col in 0..num_vectors {
            synthesis[(row, col)] += direction[col];
        }
    }
    let perturbed = DualFrame::new(synthesis);
    ensure_duality(&perturbed, operators.analysis(), &tolerance)?;
    Ok(perturbed)
}
