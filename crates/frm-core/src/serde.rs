//! JSON serialisation helpers for frames.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FrameError};
use crate::tolerance::Tolerance;
use crate::Frame;

/// Wire representation of a frame: one row per vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FrameDoc {
    vectors: Vec<Vec<f64>>,
}

/// Serialises a frame into indented JSON.
pub fn frame_to_json(frame: &Frame) -> Result<String, FrameError> {
    let doc = FrameDoc {
        vectors: (0..frame.num_vectors())
            .map(|index| frame.matrix().row(index).iter().copied().collect())
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
        .map_err(|err| FrameError::Serde(ErrorInfo::new("frame-serialize", err.to_string())))
}

/// Deserialises a frame from JSON text, re-validating the frame condition.
pub fn frame_from_json(json: &str, tolerance: &Tolerance) -> Result<Frame, FrameError> {
    let doc: FrameDoc = serde_json::from_str(json)
        .map_err(|err| FrameError::Serde(ErrorInfo::new("frame-deserialize", err.to_string())))?;
    Frame::from_rows(&doc.vectors, tolerance)
}
