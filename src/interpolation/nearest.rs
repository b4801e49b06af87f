//! Nearest-Neighbor Interpolation
//!
//! Implements [nearest-neighbor interpolation](https://en.wikipedia.org/wiki/Nearest-neighbor_interpolation).
//!
//! The query takes the value of whichever bracketing sample is closer.
//! Equidistant queries take the left sample. Queries outside the domain
//! take the nearer endpoint, since the bracket search clamps. A NaN query
//! has no nearer sample and evaluates to NaN, as in the other variants.


use log::trace;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_sample_set, SampleSet};
use crate::interpolation::locator::nearest_index;
use crate::interpolation::traits::Interpolator;


/// Nearest-neighbor interpolant
///
/// ```text
/// F(x) = y[i]     if x - x[i] <= x[i+1] - x
/// F(x) = y[i+1]   otherwise
/// ```
///
/// where `[x[i], x[i+1]]` is the bracket returned by
/// [`crate::interpolation::locator::left_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNeighborInterpolant {
    samples: SampleSet,
}
impl_sample_set!(NearestNeighborInterpolant);

impl Interpolator for NearestNeighborInterpolant {
    fn algorithm(&self) -> Algorithm { Algorithm::NearestNeighbor }
    fn samples(&self) -> &SampleSet { &self.samples }
    fn samples_mut(&mut self) -> &mut SampleSet { &mut self.samples }

    fn eval(&self, xq: f64) -> f64 {
        let x = self.samples.x();
        if x.len() < 2 {
            trace!("nearest neighbor: {} samples, returning NaN", x.len());
            return f64::NAN;
        }
        if xq.is_nan() {
            return f64::NAN;
        }

        self.samples.y()[nearest_index(x, xq)]
    }
}
