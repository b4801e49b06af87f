//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines
//! a line segment. Evaluation points lying within `[x[i], x[i+1]]`
//! are interpolated linearly between the two end points. Extrapolation
//! is disabled: points outside `[x[0], x[n-1]]` evaluate to `0.0`.


use log::trace;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_sample_set, SampleSet};
use crate::interpolation::locator::left_index;
use crate::interpolation::traits::Interpolator;


/// Value returned for queries outside `[x[0], x[n-1]]`.
pub const OUT_OF_DOMAIN: f64 = 0.0;


/// Linear interpolant
///
/// # Behavior
/// - If `xq` lies outside `[x[0], x[n-1]]`, returns [`OUT_OF_DOMAIN`].
/// - Otherwise finds the bracket `[x[i], x[i+1]]` and computes
///
/// ```text
/// yq = (y[i] * (x[i+1] - xq) + y[i+1] * (xq - x[i])) / (x[i+1] - x[i])
/// ```
///
/// Sample hits go through the same formula. Duplicate consecutive `x`
/// values make the denominator zero and the result `NaN` or `±inf`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    samples: SampleSet,
}
impl_sample_set!(LinearInterpolant);

impl Interpolator for LinearInterpolant {
    fn algorithm(&self) -> Algorithm { Algorithm::Linear }
    fn samples(&self) -> &SampleSet { &self.samples }
    fn samples_mut(&mut self) -> &mut SampleSet { &mut self.samples }

    fn eval(&self, xq: f64) -> f64 {
        blend(self.samples.x(), self.samples.y(), xq, |yi| yi)
    }
}


/// Two-point linear blend over the bracket holding `xq`.
///
/// `map` is applied to both bracketing `y` values before blending, which
/// lets transformed variants reuse the bracket search and domain rule
/// without copying the samples.
#[inline]
pub(crate) fn blend<F>(x: &[f64], y: &[f64], xq: f64, map: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = x.len();
    if n < 2 {
        trace!("linear blend: {} samples, returning NaN", n);
        return f64::NAN;
    }

    // domain check
    if xq < x[0] || x[n - 1] < xq {
        trace!("query {} outside [{}, {}]", xq, x[0], x[n - 1]);
        return OUT_OF_DOMAIN;
    }

    let i = left_index(x, xq);
    let (x0, x1) = (x[i], x[i + 1]);
    let (y0, y1) = (map(y[i]), map(y[i + 1]));

    (y0 * (x1 - xq) + y1 * (xq - x0)) / (x1 - x0)
}
