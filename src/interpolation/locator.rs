//! Bracket and nearest-sample index queries
//!
//! Shared by every interpolant so boundary and tie-break behavior is the
//! same across variants. All queries assume `x` ascending with at least
//! two samples; callers check the length first.
//!
//! Boundary policy:
//! - below `x[0]`  : left index `0`
//! - above `x[n-1]`: left index clamped to `n - 2`
//! - NaN query     : no comparison holds, so also `n - 2`
//! - equidistant   : nearest resolves to the left sample


/// First `i` with `x[i] <= xq <= x[i+1]`, from a forward scan.
///
/// The first `j >= 1` with `xq <= x[j]` gives `j - 1`; when no such `j`
/// exists the result is clamped to the last bracket. A query equal to an
/// interior sample `x[k]` therefore lands in bracket `k - 1`.
///
/// # Panics
/// If `x.len() < 2`.
#[inline]
pub fn left_index(x: &[f64], xq: f64) -> usize {
    assert!(x.len() >= 2, "bracket search needs at least 2 samples, got {}", x.len());

    x.iter()
        .skip(1)
        .position(|&xj| xq <= xj)
        .unwrap_or(x.len() - 2)
}

/// `left_index(x, xq) + 1`
///
/// # Panics
/// If `x.len() < 2`.
#[inline]
pub fn right_index(x: &[f64], xq: f64) -> usize {
    left_index(x, xq) + 1
}

/// Nearer of the two bracketing indices; exact ties go left.
///
/// # Panics
/// If `x.len() < 2`.
#[inline]
pub fn nearest_index(x: &[f64], xq: f64) -> usize {
    let i = left_index(x, xq);
    if xq - x[i] <= x[i + 1] - xq { i } else { i + 1 }
}
