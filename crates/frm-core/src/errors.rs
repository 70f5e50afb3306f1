//! Structured error types shared across FRM crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`FrameError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (dimensions, indices, eigenvalues, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the FRM engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum FrameError {
    /// The frame condition fails: the analysis operator has column rank below
    /// the ambient dimension.
    #[error("rank deficiency: {0}")]
    RankDeficient(ErrorInfo),
    /// Vector dimensions or index-set sizes disagree with the frame.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(ErrorInfo),
    /// The frame operator is not positive definite within tolerance.
    #[error("singular frame operator: {0}")]
    SingularFrameOperator(ErrorInfo),
    /// A null-space construction was requested for a frame with m = n.
    #[error("no null space: {0}")]
    NoNullSpace(ErrorInfo),
    /// The selected subframe rows do not form an invertible submatrix.
    #[error("singular subframe: {0}")]
    SingularSubframe(ErrorInfo),
    /// A tolerance-based invariant check failed.
    #[error("invariant violation: {0}")]
    Invariant(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl FrameError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            FrameError::RankDeficient(info)
            | FrameError::DimensionMismatch(info)
            | FrameError::SingularFrameOperator(info)
            | FrameError::NoNullSpace(info)
            | FrameError::SingularSubframe(info)
            | FrameError::Invariant(info)
            | FrameError::Serde(info) => info,
        }
    }
}
