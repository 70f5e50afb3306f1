//! Spectral analysis of frame operators: bounds, SPD inverses and the
//! canonical tight frame.

pub mod bounds;
pub mod spd;
pub mod tight;

pub use bounds::{frame_bounds, inverse_bounds, operator_eigenvalues, FrameBounds};
pub use spd::{invert_spd, inverse_sqrt_spd};
pub use tight::tighten;
