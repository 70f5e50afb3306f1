#![deny(missing_docs)]
#![doc = "Single-call analysis pipeline for frames: operators, bounds, duals, \
tight normalisation and redundancy, aggregated into a deterministic report."]

/// Canonical hashing helpers for analysis reports.
pub mod hash;
/// JSON serialisation helpers for analysis reports.
#[path = "serde.rs"]
pub mod serde_io;

use frm_core::errors::FrameError;
use frm_core::{Frame, Tolerance};
use frm_dual::{canonical_dual, classify, RedundancyReport};
use frm_op::derive_operators;
use frm_spectral::{frame_bounds, inverse_bounds, operator_eigenvalues, tighten, FrameBounds};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use hash::{compute_hashes, HashReport};

/// Provenance metadata preserved in analysis reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceInfo {
    /// Master seed associated with the frame, when it was sampled.
    pub seed: Option<u64>,
    /// Identifier for the run that produced the frame.
    pub run_id: Option<String>,
    /// Source commit describing the producing pipeline.
    pub commit: Option<String>,
}

/// Options controlling a frame analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOpts {
    /// Tolerance threaded through every invariant check.
    #[serde(default)]
    pub tolerance: Tolerance,
    /// Optional provenance metadata to include in the report.
    #[serde(default)]
    pub provenance: Option<ProvenanceInfo>,
}

impl Default for AnalysisOpts {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            provenance: None,
        }
    }
}

/// Summary of the derived objects for a single frame.
///
/// Scalar metrics are rounded to the 1e-9 grid so repeated analyses of the
/// same frame serialise and hash identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of frame vectors `m`.
    pub num_vectors: usize,
    /// Ambient dimension `n`.
    pub dim: usize,
    /// Frame bounds `(A, B)` of the frame operator.
    pub bounds: FrameBounds,
    /// Frame bounds of the inverse frame operator, `(1/B, 1/A)`.
    pub inverse_bounds: FrameBounds,
    /// Eigenvalues of the frame operator in descending order.
    pub eigenvalues: Vec<f64>,
    /// Largest deviation of the canonical duality product from the identity.
    pub duality_residual: f64,
    /// Frobenius norm of the canonical dual.
    pub canonical_dual_norm: f64,
    /// Largest deviation of the tightened frame operator from the identity.
    pub tight_residual: f64,
    /// Removable/essential classification with its diagnostic diagonal.
    pub redundancy: RedundancyReport,
    /// Canonical content addressed hashes for the analysis.
    pub hashes: HashReport,
    /// Provenance metadata describing the origin of the analysed frame.
    pub provenance: ProvenanceInfo,
}

/// Analyses a frame and produces the corresponding deterministic report.
pub fn analyze_frame(frame: &Frame, opts: &AnalysisOpts) -> Result<AnalysisReport, FrameError> {
    let tolerance = opts.tolerance.sanitised();
    let operators = derive_operators(frame, &tolerance)?;

    let bounds = frame_bounds(operators.frame_operator(), &tolerance)?;
    let eigenvalues: Vec<f64> = operator_eigenvalues(operators.frame_operator(), &tolerance)?
        .into_iter()
        .map(round_metric)
        .collect();

    let dual = canonical_dual(&operators, &tolerance)?;
    let duality_residual = round_metric(dual.duality_residual(operators.analysis())?);
    let canonical_dual_norm = round_metric(dual.frobenius_norm());

    let tight = tighten(frame, &tolerance)?;
    let tight_operators = derive_operators(&tight, &tolerance)?;
    let identity = DMatrix::<f64>::identity(frame.dim(), frame.dim());
    let tight_residual = round_metric(Tolerance::max_abs_diff(
        tight_operators.frame_operator(),
        &identity,
    ));

    let mut redundancy = classify(&operators, &tolerance)?;
    redundancy.diagonals = redundancy.diagonals.into_iter().map(round_metric).collect();

    let reciprocal = inverse_bounds(&bounds);
    let bounds = round_bounds(&bounds);
    let reciprocal = round_bounds(&reciprocal);

    let provenance = opts.provenance.clone().unwrap_or_default();
    let hashes = compute_hashes(
        frame,
        &bounds,
        &eigenvalues,
        duality_residual,
        tight_residual,
        &redundancy,
        &provenance,
    )?;

    Ok(AnalysisReport {
        num_vectors: frame.num_vectors(),
        dim: frame.dim(),
        bounds,
        inverse_bounds: reciprocal,
        eigenvalues,
        duality_residual,
        canonical_dual_norm,
        tight_residual,
        redundancy,
        hashes,
        provenance,
    })
}

fn round_metric(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

fn round_bounds(bounds: &FrameBounds) -> FrameBounds {
    FrameBounds {
        lower: round_metric(bounds.lower),
        upper: round_metric(bounds.upper),
    }
}
