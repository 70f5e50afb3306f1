#![deny(missing_docs)]
#![doc = "Core types, validation and deterministic sampling for the FRM engine."]

use nalgebra::{DMatrix, DVector};

pub mod errors;
pub mod rng;
pub mod sampler;
#[path = "serde.rs"]
pub mod serde_io;
pub mod tolerance;

pub use errors::{ErrorInfo, FrameError};
pub use rng::{derive_substream_seed, RngHandle};
pub use tolerance::{Tolerance, DEFAULT_EPSILON};

/// An ordered, validated collection of `m` vectors spanning `R^n`.
///
/// The vectors are stored as the rows of an `m x n` matrix, which is exactly
/// the analysis operator of the frame. Construction enforces the frame
/// condition (full column rank within tolerance); a value of this type is
/// immutable and every derived object treats it as read-only. Restricting to
/// a subset of vectors means constructing a new frame via [`Frame::subframe`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    vectors: DMatrix<f64>,
}

impl Frame {
    /// Builds a frame from an ordered sequence of equally sized rows.
    ///
    /// Fails with a dimension-mismatch error on empty or ragged input and
    /// with a rank-deficiency error when the rows do not span `R^n`.
    pub fn from_rows(rows: &[Vec<f64>], tolerance: &Tolerance) -> Result<Self, FrameError> {
        if rows.is_empty() {
            return Err(FrameError::DimensionMismatch(ErrorInfo::new(
                "empty-frame",
                "a frame requires at least one vector",
            )));
        }
        let dim = rows[0].len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(FrameError::DimensionMismatch(
                    ErrorInfo::new("ragged-rows", "all frame vectors must share one dimension")
                        .with_context("index", index.to_string())
                        .with_context("expected", dim.to_string())
                        .with_context("actual", row.len().to_string()),
                ));
            }
        }
        let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::from_matrix(DMatrix::from_row_slice(rows.len(), dim, &flat), tolerance)
    }

    /// Builds a frame from an `m x n` matrix whose rows are the frame vectors.
    pub fn from_matrix(vectors: DMatrix<f64>, tolerance: &Tolerance) -> Result<Self, FrameError> {
        let tolerance = tolerance.sanitised();
        let (num_vectors, dim) = vectors.shape();
        if num_vectors == 0 || dim == 0 {
            return Err(FrameError::DimensionMismatch(ErrorInfo::new(
                "empty-frame",
                "a frame requires at least one vector of positive dimension",
            )));
        }
        if num_vectors < dim {
            return Err(FrameError::RankDeficient(
                ErrorInfo::new(
                    "too-few-vectors",
                    "a spanning collection needs at least as many vectors as dimensions",
                )
                .with_context("num_vectors", num_vectors.to_string())
                .with_context("dim", dim.to_string()),
            ));
        }
        let rank = vectors.rank(tolerance.epsilon);
        if rank < dim {
            return Err(FrameError::RankDeficient(
                ErrorInfo::new("rank-deficient", "frame vectors do not span the ambient space")
                    .with_context("rank", rank.to_string())
                    .with_context("dim", dim.to_string())
                    .with_hint("supply vectors whose row matrix has full column rank"),
            ));
        }
        Ok(Self { vectors })
    }

    /// Number of vectors `m` in the frame.
    pub fn num_vectors(&self) -> usize {
        self.vectors.nrows()
    }

    /// Ambient dimension `n`.
    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    /// Ratio `m / n`, a coarse measure of how redundant the frame is.
    pub fn redundancy_ratio(&self) -> f64 {
        self.num_vectors() as f64 / self.dim() as f64
    }

    /// Returns the frame vector at `index` as an owned column vector.
    pub fn vector(&self, index: usize) -> Result<DVector<f64>, FrameError> {
        if index >= self.num_vectors() {
            return Err(FrameError::DimensionMismatch(
                ErrorInfo::new("index-out-of-range", "frame vector index out of range")
                    .with_context("index", index.to_string())
                    .with_context("num_vectors", self.num_vectors().to_string()),
            ));
        }
        Ok(self.vectors.row(index).transpose())
    }

    /// Borrow of the `m x n` row matrix (the analysis operator).
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.vectors
    }

    /// Constructs a new frame restricted to the selected row indices.
    ///
    /// Indices must be distinct and in range; the restricted collection is
    /// validated like any other construction, so a non-spanning selection is
    /// rejected with a rank-deficiency error.
    pub fn subframe(&self, indices: &[usize], tolerance: &Tolerance) -> Result<Self, FrameError> {
        validate_index_set(indices, self.num_vectors())?;
        let rows: Vec<Vec<f64>> = indices
            .iter()
            .map(|&index| self.vectors.row(index).iter().copied().collect())
            .collect();
        Self::from_rows(&rows, tolerance)
    }
}

/// Checks that an index set is non-empty, distinct and within `0..bound`.
pub fn validate_index_set(indices: &[usize], bound: usize) -> Result<(), FrameError> {
    if indices.is_empty() {
        return Err(FrameError::DimensionMismatch(ErrorInfo::new(
            "empty-index-set",
            "at least one index is required",
        )));
    }
    let mut seen = indices.to_vec();
    seen.sort_unstable();
    seen.dedup();
    if seen.len() != indices.len() {
        return Err(FrameError::DimensionMismatch(ErrorInfo::new(
            "duplicate-indices",
            "index sets must contain distinct entries",
        )));
    }
    if let Some(&out) = indices.iter().find(|&&index| index >= bound) {
        return Err(FrameError::DimensionMismatch(
            ErrorInfo::new("index-out-of-range", "index exceeds the number of frame vectors")
                .with_context("index", out.to_string())
                .with_context("num_vectors", bound.to_string()),
        ));
    }
    Ok(())
}
