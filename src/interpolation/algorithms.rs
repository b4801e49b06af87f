//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods
//! and builds a boxed interpolant for runtime selection.

use crate::interpolation::linear::LinearInterpolant;
use crate::interpolation::logarithmic::CommonLogarithmicInterpolant;
use crate::interpolation::nearest::NearestNeighborInterpolant;
use crate::interpolation::traits::Interpolator;

/// Interpolation algorithm variants.
/// - [`Algorithm::NearestNeighbor`]   value of the nearest sample
/// - [`Algorithm::Linear`]            piecewise-linear blend
/// - [`Algorithm::CommonLogarithmic`] linear blend in `log10(y)` space
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    NearestNeighbor,
    Linear,
    CommonLogarithmic,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor   => "nearest neighbor",
            Algorithm::Linear            => "linear",
            Algorithm::CommonLogarithmic => "common logarithmic",
        }
    }

    /// Empty interpolant of this variant; populate it with
    /// [`Interpolator::set_data_points`].
    pub fn interpolant(self) -> Box<dyn Interpolator + Send + Sync> {
        match self {
            Algorithm::NearestNeighbor   => Box::new(NearestNeighborInterpolant::new()),
            Algorithm::Linear            => Box::new(LinearInterpolant::new()),
            Algorithm::CommonLogarithmic => Box::new(CommonLogarithmicInterpolant::new()),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
