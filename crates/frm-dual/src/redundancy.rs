use frm_core::errors::FrameError;
use frm_core::Tolerance;
use frm_op::FrameOperators;
use frm_spectral::invert_spd;
use serde::{Deserialize, Serialize};

/// Per-element classification of a frame vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedundancyLabel {
    /// Removing the vector leaves a spanning collection.
    Removable,
    /// Removing the vector makes the remaining collection incomplete.
    Essential,
}

/// Outcome of the redundancy classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedundancyReport {
    /// Diagonal entries `d_i = ⟨f_i, S⁻¹f_i⟩` in frame order.
    pub diagonals: Vec<f64>,
    /// Label per frame vector, in frame order.
    pub labels: Vec<RedundancyLabel>,
}

impl RedundancyReport {
    /// Indices classified as essential.
    pub fn essential_indices(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label == RedundancyLabel::Essential)
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices classified as removable.
    pub fn removable_indices(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label == RedundancyLabel::Removable)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Classifies every frame element as removable or essential.
///
/// `d_i` is the `i`-th diagonal entry of `Analysis · S⁻¹ · Synthesis`; the
/// element is essential exactly when `|d_i - 1| < ε`, meaning it spans a
/// one-dimensional subspace no other element covers. The computation is
/// local and non-iterative: it makes no claim about removing several
/// elements at once.
pub fn classify(
    operators: &FrameOperators,
    tolerance: &Tolerance,
) -> Result<RedundancyReport, FrameError> {
    let tolerance = tolerance.sanitised();
    let s_inverse = invert_spd(operators.frame_operator(), &tolerance)?;
    let projector = operators.analysis() * s_inverse * operators.synthesis();
    let diagonals: Vec<f64> = projector.diagonal().iter().copied().collect();
    let labels = diagonals
        .iter()
        .map(|d| {
            if (d - 1.0).abs() < tolerance.epsilon {
                RedundancyLabel::Essential
            } else {
                RedundancyLabel::Removable
            }
        })
        .collect();
    Ok(RedundancyReport { diagonals, labels })
}
