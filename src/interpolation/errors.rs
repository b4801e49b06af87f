//! Interpolation error types.
//!
//! Only configuration can fail. Evaluation is total: numeric degeneracies
//! (duplicate `x`, `log10` of non-positive `y`, too few samples) come back
//! as IEEE-754 special values rather than errors.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InterpolationError {
    #[error("length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
}
