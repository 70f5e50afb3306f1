use std::path::Path;

use frm_core::errors::{ErrorInfo, FrameError};

use crate::AnalysisReport;

/// Serialises an analysis report into indented JSON.
pub fn analysis_to_json(report: &AnalysisReport) -> Result<String, FrameError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| FrameError::Serde(ErrorInfo::new("analysis-serialize", err.to_string())))
}

/// Deserialises an analysis report from JSON text.
pub fn analysis_from_json(json: &str) -> Result<AnalysisReport, FrameError> {
    serde_json::from_str(json)
        .map_err(|err| FrameError::Serde(ErrorInfo::new("analysis-deserialize", err.to_string())))
}

/// Writes a JSON payload to disk with deterministic formatting.
pub fn write_json(path: &Path, json: &str) -> Result<(), FrameError> {
    std::fs::write(path, json).map_err(|err| {
        FrameError::Serde(
            ErrorInfo::new("json-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Reads a JSON payload from disk.
pub fn read_json(path: &Path) -> Result<String, FrameError> {
    std::fs::read_to_string(path).map_err(|err| {
        FrameError::Serde(
            ErrorInfo::new("json-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
