use frm_core::errors::{ErrorInfo, FrameError};
use frm_core::{validate_index_set, Tolerance};
use frm_op::FrameOperators;
use nalgebra::DMatrix;

use crate::{ensure_duality, DualFrame};

/// Computes a dual supported on exactly `n` selected frame vectors.
///
/// The analysis operator is restricted to the chosen rows, the resulting
/// `n x n` subframe operator is inverted, and the subframe's canonical dual
/// is embedded back into an `n x m` operator with zero columns outside the
/// index set. Because the embedded columns reproduce the inverse of the
/// restricted analysis, the result is a valid dual of the whole frame.
///
/// Index validity is a caller precondition: a dependent selection fails with
/// the singular-subframe error and is never retried or resampled here.
pub fn subframe_dual(
    operators: &FrameOperators,
    indices: &[usize],
    tolerance: &Tolerance,
) -> Result<DualFrame, FrameError> {
    let tolerance = tolerance.sanitised();
    let num_vectors = operators.num_vectors();
    let dim = operators.dim();
    validate_index_set(indices, num_vectors)?;
    if indices.len() != dim {
        return Err(FrameError::DimensionMismatch(
            ErrorInfo::new("subframe-size", "a subframe dual requires exactly n indices")
                .with_context("expected", dim.to_string())
                .with_context("actual", indices.len().to_string()),
        ));
    }

    let analysis = operators.analysis();
    let sub_analysis = DMatrix::from_fn(dim, dim, |row, col| analysis[(indices[row], col)]);
    if sub_analysis.rank(tolerance.epsilon) < dim {
        return Err(FrameError::SingularSubframe(
            ErrorInfo::new(
                "singular-subframe",
                "selected frame vectors are linearly dependent",
            )
            .with_context("indices", format!("{indices:?}"))
            .with_hint("choose n linearly independent rows; this operation does not resample"),
        ));
    }

    let sub_synthesis = sub_analysis.transpose();
    let sub_operator = &sub_synthesis * &sub_analysis;
    let sub_inverse = sub_operator.try_inverse().ok_or_else(|| {
        FrameError::SingularSubframe(ErrorInfo::new(
            "singular-subframe",
            "subframe operator inversion failed",
        ))
    })?;
    let sub_dual = sub_inverse * sub_synthesis;

    let mut synthesis = DMatrix::<f64>::zeros(dim, num_vectors);
    for (position, &index) in indices.iter().enumerate() {
        for row in 0..dim {
            synthesis[(row, index)] = sub_dual[(row, position)];
        }
    }
    let dual = DualFrame::new(synthesis);
    ensure_duality(&dual, operators.analysis(), &tolerance)?;
    Ok(dual)
}
