//! Batch evaluation summary.
//!
//! [`InterpolationReport`] is what
//! [`Interpolator::report`](crate::interpolation::Interpolator::report)
//! returns. Besides the values it records the sample domain and how many
//! queries fell outside it. Those queries hit the variant's out-of-domain
//! rule: `0.0` for linear, `1.0` for common logarithmic, and the nearer
//! endpoint for nearest neighbor.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// - `algorithm_name`  : name of the interpolation method (e.g. `"linear"`)
/// - `n_provided`      : number of input data points `(x, y)`
/// - `domain`          : `(x[0], x[n-1])`, `None` without samples
/// - `n_out_of_domain` : queries strictly below `x[0]` or above `x[n-1]`
/// - `evaluated`       : interpolated values, one per query, in query order
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub domain: Option<(f64, f64)>,
    pub n_out_of_domain: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, domain: Option<(f64, f64)>) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            domain,
            n_out_of_domain: 0,
            evaluated: Vec::new(),
        }
    }

    /// Records one query and its value.
    pub(crate) fn push(&mut self, xq: f64, yq: f64) {
        if let Some((lo, hi)) = self.domain {
            if xq < lo || hi < xq {
                self.n_out_of_domain += 1;
            }
        }
        self.evaluated.push(yq);
    }
}
