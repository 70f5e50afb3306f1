use frm_core::errors::{ErrorInfo, FrameError};
use frm_core::{Frame, Tolerance};
use frm_op::derive_operators;

use crate::spd::inverse_sqrt_spd;

/// Computes the canonical tight frame of a valid frame.
///
/// The tight analysis operator is `Analysis · S^{-1/2}`, so the resulting
/// frame operator is `S^{-1/2} · S · S^{-1/2} = I`. The identity is verified
/// within epsilon on the result; a failing verification is an invariant
/// violation, not something to be corrected.
pub fn tighten(frame: &Frame, tolerance: &Tolerance) -> Result<Frame, FrameError> {
    let operators = derive_operators(frame, tolerance)?;
    let inverse_sqrt = inverse_sqrt_spd(operators.frame_operator(), tolerance)?;
    let tight_analysis = operators.analysis() * &inverse_sqrt;
    let tight = Frame::from_matrix(tight_analysis, tolerance)?;

    let tight_operators = derive_operators(&tight, tolerance)?;
    if !tolerance
        .sanitised()
        .is_identity(tight_operators.frame_operator())
    {
        return Err(FrameError::Invariant(ErrorInfo::new(
            "not-tight",
            "tightened frame operator deviates from the identity",
        )));
    }
    Ok(tight)
}
