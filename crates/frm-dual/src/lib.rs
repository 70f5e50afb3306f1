#![deny(missing_docs)]
#![doc = "Dual frame computations and per-element redundancy classification."]

use frm_core::errors::{ErrorInfo, FrameError};
use frm_core::Tolerance;
use nalgebra::{DMatrix, DVector};

/// Canonical dual frame computation.
pub mod canonical;
/// Null-space extraction and null-space-perturbed duals.
pub mod nullspace;
/// Per-element removable/essential classification.
pub mod redundancy;
/// Duals supported on an invertible subset of frame vectors.
pub mod subframe;

pub use canonical::canonical_dual;
pub use nullspace::{perturbed_dual, synthesis_null_basis};
pub use redundancy::{classify, RedundancyLabel, RedundancyReport};
pub use subframe::subframe_dual;

/// A dual frame, stored as its `n x m` synthesis-type operator `T̃`.
///
/// Every dual satisfies `T̃ · Analysis = I_n` within tolerance. Duals are not
/// unique when `m > n`; the canonical dual is the unique minimiser of the
/// Frobenius norm over the affine set of duals.
#[derive(Debug, Clone, PartialEq)]
pub struct DualFrame {
    synthesis: DMatrix<f64>,
}

impl DualFrame {
    pub(crate) fn new(synthesis: DMatrix<f64>) -> Self {
        Self { synthesis }
    }

    /// Borrow of the `n x m` dual synthesis operator.
    pub fn synthesis(&self) -> &DMatrix<f64> {
        &self.synthesis
    }

    /// Number of dual vectors `m`.
    pub fn num_vectors(&self) -> usize {
        self.synthesis.ncols()
    }

    /// Ambient dimension `n`.
    pub fn dim(&self) -> usize {
        self.synthesis.nrows()
    }

    /// Returns dual vector `i`, the `i`-th column of the synthesis operator.
    pub fn vector(&self, index: usize) -> Result<DVector<f64>, FrameError> {
        if index >= self.num_vectors() {
            return Err(FrameError::DimensionMismatch(
                ErrorInfo::new("index-out-of-range", "dual vector index out of range")
                    .with_context("index", index.to_string())
                    .with_context("num_vectors", self.num_vectors().to_string()),
            ));
        }
        Ok(self.synthesis.column(index).into_owned())
    }

    /// Frobenius norm of the dual synthesis operator.
    pub fn frobenius_norm(&self) -> f64 {
        self.synthesis.norm()
    }

    /// Largest absolute deviation of `T̃ · Analysis` from the identity.
    pub fn duality_residual(&self, analysis: &DMatrix<f64>) -> Result<f64, FrameError> {
        if analysis.nrows() != self.num_vectors() || analysis.ncols() != self.dim() {
            return Err(FrameError::DimensionMismatch(
                ErrorInfo::new("dual-shape", "analysis operator shape does not match the dual")
                    .with_context("analysis", format!("{}x{}", analysis.nrows(), analysis.ncols()))
                    .with_context("dual", format!("{}x{}", self.dim(), self.num_vectors())),
            ));
        }
        let product = &self.synthesis * analysis;
        let identity = DMatrix::<f64>::identity(self.dim(), self.dim());
        Ok(Tolerance::max_abs_diff(&product, &identity))
    }
}

/// Verifies the duality identity within tolerance; failing is an invariant
/// violation, never something to correct.
pub(crate) fn ensure_duality(
    dual: &DualFrame,
    analysis: &DMatrix<f64>,
    tolerance: &Tolerance,
) -> Result<(), FrameError> {
    let residual = dual.duality_residual(analysis)?;
    if residual > tolerance.sanitised().epsilon {
        return Err(FrameError::Invariant(
            ErrorInfo::new("duality-violated", "dual operator fails the duality identity")
                .with_context("residual", format!("{residual:e}")),
        ));
    }
    Ok(())
}
