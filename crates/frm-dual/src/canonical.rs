use frm_core::errors::FrameError;
use frm_core::Tolerance;
use frm_op::FrameOperators;
use frm_spectral::invert_spd;

use crate::{ensure_duality, DualFrame};

/// Computes the canonical dual frame `T̃ = S⁻¹ · Synthesis`.
///
/// Among all valid duals the canonical dual has strictly minimal Frobenius
/// norm: its rows lie in the row space of the synthesis operator, so any
/// other dual differs by a null-space component orthogonal to it. The
/// duality identity is verified on the result within epsilon.
pub fn canonical_dual(
    operators: &FrameOperators,
    tolerance: &Tolerance,
) -> Result<DualFrame, FrameError> {
    let s_inverse = invert_spd(operators.frame_operator(), tolerance)?;
    let dual = DualFrame::new(&s_inverse * operators.synthesis());
    ensure_duality(&dual, operators.analysis(), tolerance)?;
    Ok(dual)
}
