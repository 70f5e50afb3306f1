//! Seeded Gaussian frame sampling with deterministic substreams.

use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::errors::{ErrorInfo, FrameError};
use crate::rng::{derive_substream_seed, RngHandle};
use crate::tolerance::Tolerance;
use crate::Frame;

/// Upper bound on resampling attempts before a rank failure is surfaced.
const MAX_ATTEMPTS: usize = 8;

/// Draws a random frame of `num_vectors` standard Gaussian vectors in `R^dim`.
///
/// Coordinates are i.i.d. standard normal, so the sampled matrix has full
/// column rank with probability one; the bounded retry loop only exists to
/// absorb degenerate draws near the rank tolerance. Shape errors are not
/// retried.
pub fn gaussian_frame(
    num_vectors: usize,
    dim: usize,
    rng: &mut RngHandle,
    tolerance: &Tolerance,
) -> Result<Frame, FrameError> {
    let mut last_rank_failure = None;
    for _ in 0..MAX_ATTEMPTS {
        let matrix = DMatrix::from_fn(num_vectors, dim, |_, _| {
            let value: f64 = rng.sample(StandardNormal);
            value
        });
        match Frame::from_matrix(matrix, tolerance) {
            Ok(frame) => return Ok(frame),
            Err(FrameError::RankDeficient(info)) if info.code == "rank-deficient" => {
                last_rank_failure = Some(FrameError::RankDeficient(info));
            }
            Err(err) => return Err(err),
        }
    }
    Err(last_rank_failure.unwrap_or_else(|| {
        FrameError::RankDeficient(ErrorInfo::new(
            "sampler-exhausted",
            "gaussian sampler failed to produce a full rank frame",
        ))
    }))
}

/// Draws `count` independent Gaussian frames on deterministic substreams.
///
/// Frame `i` is sampled from the substream seed derived from
/// `(master_seed, i)`, so ensembles are reproducible and individual members
/// can be regenerated in isolation.
pub fn gaussian_ensemble(
    count: usize,
    num_vectors: usize,
    dim: usize,
    master_seed: u64,
    tolerance: &Tolerance,
) -> Result<Vec<Frame>, FrameError> {
    let mut frames = Vec::with_capacity(count);
    for substream in 0..count {
        let seed = derive_substream_seed(master_seed, substream as u64);
        let mut rng = RngHandle::from_seed(seed);
        frames.push(gaussian_frame(num_vectors, dim, &mut rng, tolerance)?);
    }
    Ok(frames)
}
