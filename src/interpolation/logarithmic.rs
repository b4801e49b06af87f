//! Common Logarithmic Interpolation
//!
//! Linear interpolation of `log10(y)` against `x`, mapped back through
//! `10^`. Suited to values spanning several orders of magnitude; between
//! two samples the result follows their geometric progression.
//!
//! The bracket search, domain rule and blend are those of
//! [`crate::interpolation::linear`]. One consequence: the linear
//! out-of-domain sentinel `0.0` lands in log space, so queries outside
//! `[x[0], x[n-1]]` evaluate to `10^0 = 1.0` here, not `0.0`.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_sample_set, SampleSet};
use crate::interpolation::linear::blend;
use crate::interpolation::traits::Interpolator;


/// Common logarithmic (base 10) interpolant
///
/// ```text
/// F(xq) = 10 ^ linear({x[i], log10(y[i])})(xq)
/// ```
///
/// All `y[i]` should be positive. `log10` of zero is `-inf` and of a
/// negative value `NaN`; both propagate to the output.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonLogarithmicInterpolant {
    samples: SampleSet,
}
impl_sample_set!(CommonLogarithmicInterpolant);

impl Interpolator for CommonLogarithmicInterpolant {
    fn algorithm(&self) -> Algorithm { Algorithm::CommonLogarithmic }
    fn samples(&self) -> &SampleSet { &self.samples }
    fn samples_mut(&mut self) -> &mut SampleSet { &mut self.samples }

    fn eval(&self, xq: f64) -> f64 {
        let log10_y = blend(self.samples.x(), self.samples.y(), xq, f64::log10);
        10f64.powf(log10_y)
    }
}
