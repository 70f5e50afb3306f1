use sha2::{Digest, Sha256};

use frm_core::errors::{ErrorInfo, FrameError};
use frm_core::Frame;
use frm_dual::RedundancyReport;
use frm_spectral::FrameBounds;
use serde::{Deserialize, Serialize};

use crate::ProvenanceInfo;

/// Canonical hashes embedded within analysis reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HashReport {
    /// Content addressed hash of the entire analysis report.
    pub analysis_hash: String,
    /// Content addressed hash of the analysed frame's row matrix.
    pub frame_hash: String,
}

/// Computes the canonical hash of a frame's row matrix.
pub fn frame_hash(frame: &Frame) -> Result<String, FrameError> {
    let rows: Vec<Vec<f64>> = (0..frame.num_vectors())
        .map(|index| frame.matrix().row(index).iter().copied().collect())
        .collect();
    let bytes = serde_json::to_vec(&rows)
        .map_err(|err| FrameError::Serde(ErrorInfo::new("frame-hash", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Computes deterministic hashes for an analysis report.
pub(crate) fn compute_hashes(
    frame: &Frame,
    bounds: &FrameBounds,
    eigenvalues: &[f64],
    duality_residual: f64,
    tight_residual: f64,
    redundancy: &RedundancyReport,
    provenance: &ProvenanceInfo,
) -> Result<HashReport, FrameError> {
    let frame_hash = frame_hash(frame)?;
    let payload = serde_json::json!({
        "bounds": bounds,
        "eigenvalues": eigenvalues,
        "duality_residual": duality_residual,
        "tight_residual": tight_residual,
        "redundancy": redundancy,
        "provenance": provenance,
    });
    let payload_bytes = serde_json::to_vec(&payload)
        .map_err(|err| FrameError::Serde(ErrorInfo::new("analysis-hash", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(frame_hash.as_bytes());
    hasher.update(&payload_bytes);
    Ok(HashReport {
        analysis_hash: hex::encode(hasher.finalize()),
        frame_hash,
    })
}
