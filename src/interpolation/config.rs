//! Shared data-point storage for interpolation algorithms.
//!
//! Provides [`SampleSet`], the ordered `(x, y)` samples every interpolant
//! owns. Shared by all interpolation algorithms.
//!
//! [`SampleSet`] — universal fields
//! - `x` : sample abscissas, expected strictly increasing
//! - `y` : sample values
//!
//! Only the `x`/`y` length agreement is validated. Ascending order and the
//! two-sample minimum are the caller's responsibility; see
//! [`crate::interpolation::locator`] for what happens when they are not met.

use log::debug;

use crate::interpolation::errors::InterpolationError;


/// Ordered `(x, y)` samples forming the interpolation domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the samples with `xs` zipped against `ys`.
    ///
    /// # Errors
    /// - [`InterpolationError::LengthMismatch`] if the slices differ in
    ///   length. The previous samples are kept in that case.
    pub fn set(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch { x_len: xs.len(), y_len: ys.len() });
        }

        self.x.clear();
        self.x.extend_from_slice(xs);
        self.y.clear();
        self.y.extend_from_slice(ys);

        debug!("replaced data points: n={}", self.x.len());
        Ok(())
    }

    /// Replaces the samples with already-paired `(x, y)` values.
    pub fn set_pairs(&mut self, pairs: &[(f64, f64)]) {
        self.x.clear();
        self.y.clear();
        for &(x, y) in pairs {
            self.x.push(x);
            self.y.push(y);
        }

        debug!("replaced data points: n={}", self.x.len());
    }

    // getters
    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// `(x, y)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// `(x[0], x[n-1])`, or `None` when empty.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((*self.x.first()?, *self.x.last()?))
    }
}

impl From<&[(f64, f64)]> for SampleSet {
    fn from(pairs: &[(f64, f64)]) -> Self {
        let mut set = Self::new();
        set.set_pairs(pairs);
        set
    }
}


macro_rules! impl_sample_set {
    ($interp:ty) => {
        impl $interp {
            /// Empty interpolant; populate with `set_data_points`.
            pub fn new() -> Self {
                Self { samples: $crate::interpolation::config::SampleSet::new() }
            }

            pub fn with_data_points(
                xs: &[f64],
                ys: &[f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                let mut samples = $crate::interpolation::config::SampleSet::new();
                samples.set(xs, ys)?;
                Ok(Self { samples })
            }

            pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
                Self { samples: $crate::interpolation::config::SampleSet::from(pairs) }
            }
        }

        impl Default for $interp {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
pub(crate) use impl_sample_set;
