#![deny(missing_docs)]
#![doc = "Derivation of the analysis, synthesis, Gram and frame operators."]

use frm_core::errors::{ErrorInfo, FrameError};
use frm_core::{Frame, Tolerance};
use nalgebra::DMatrix;

/// The four operators derived from a frame.
///
/// All members are owned by this bundle and read-only to consumers. The
/// synthesis operator is literally the transpose of the analysis operator;
/// the Gram matrix and the frame operator are the two possible products of
/// the pair, taken in either order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOperators {
    analysis: DMatrix<f64>,
    synthesis: DMatrix<f64>,
    gram: DMatrix<f64>,
    frame_operator: DMatrix<f64>,
}

impl FrameOperators {
    /// The `m x n` analysis operator; row `i` is frame vector `i`.
    pub fn analysis(&self) -> &DMatrix<f64> {
        &self.analysis
    }

    /// The `n x m` synthesis operator, the transpose of the analysis operator.
    pub fn synthesis(&self) -> &DMatrix<f64> {
        &self.synthesis
    }

    /// The `m x m` Gram matrix of pairwise inner products.
    pub fn gram(&self) -> &DMatrix<f64> {
        &self.gram
    }

    /// The `n x n` frame operator `S`.
    pub fn frame_operator(&self) -> &DMatrix<f64> {
        &self.frame_operator
    }

    /// Number of frame vectors `m`.
    pub fn num_vectors(&self) -> usize {
        self.analysis.nrows()
    }

    /// Ambient dimension `n`.
    pub fn dim(&self) -> usize {
        self.analysis.ncols()
    }
}

/// Derives the operator bundle for a validated frame.
///
/// Pure function with no side effects. Symmetry of the two products is
/// checked elementwise against the transpose within tolerance; a failing
/// check is surfaced as an invariant violation rather than being corrected,
/// since floating accumulation may break bit-exact symmetry but never
/// tolerance-level symmetry for well-formed input.
pub fn derive_operators(
    frame: &Frame,
    tolerance: &Tolerance,
) -> Result<FrameOperators, FrameError> {
    let tolerance = tolerance.sanitised();
    let analysis = frame.matrix().clone();
    let synthesis = analysis.transpose();
    let gram = &analysis * &synthesis;
    let frame_operator = &synthesis * &analysis;

    check_symmetric(&gram, &tolerance, "asymmetric-gram")?;
    check_symmetric(&frame_operator, &tolerance, "asymmetric-frame-operator")?;

    Ok(FrameOperators {
        analysis,
        synthesis,
        gram,
        frame_operator,
    })
}

fn check_symmetric(
    matrix: &DMatrix<f64>,
    tolerance: &Tolerance,
    code: &str,
) -> Result<(), FrameError> {
    let deviation = Tolerance::max_abs_diff(matrix, &matrix.transpose());
    if deviation > tolerance.epsilon {
        return Err(FrameError::Invariant(
            ErrorInfo::new(code, "derived operator deviates from its transpose")
                .with_context("deviation", format!("{deviation:e}"))
                .with_context("epsilon", format!("{:e}", tolerance.epsilon)),
        ));
    }
    Ok(())
}
