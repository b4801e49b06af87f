use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::SampleSet;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;

/// Capability shared by every interpolant.
///
/// Each variant owns one [`SampleSet`] and supplies only the evaluation
/// formula; data-point configuration and batch evaluation come from the
/// provided methods.
///
/// `eval` never fails. `NaN` and `±inf` are legitimate outputs for
/// degenerate samples (duplicate `x`, non-positive `y` under the log
/// transform, fewer than two samples).
pub trait Interpolator {
    fn algorithm(&self) -> Algorithm;

    fn samples(&self) -> &SampleSet;

    fn samples_mut(&mut self) -> &mut SampleSet;

    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> f64;

    /// Replaces the data points with `xs` zipped against `ys`.
    ///
    /// # Errors
    /// - [`InterpolationError::LengthMismatch`] if the lengths differ.
    fn set_data_points(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), InterpolationError> {
        self.samples_mut().set(xs, ys)
    }

    /// Replaces the data points with already-paired `(x, y)` values.
    fn set_data_pairs(&mut self, pairs: &[(f64, f64)]) {
        self.samples_mut().set_pairs(pairs);
    }

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// Evaluates every point in `x_eval` and wraps the results in an
    /// [`InterpolationReport`].
    fn report(&self, x_eval: &[f64]) -> InterpolationReport {
        let samples = self.samples();
        let mut report = InterpolationReport::new(
            self.algorithm(),
            samples.len(),
            samples.domain(),
        );
        report.evaluated.reserve(x_eval.len());
        for &xq in x_eval {
            report.push(xq, self.eval(xq));
        }
        report
    }
}
