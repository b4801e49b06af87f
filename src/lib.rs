//! Numerical interpolation over one-dimensional `{x, y}` data points.
//!
//! Three interpolants share one [`Interpolator`](interpolation::Interpolator)
//! capability and one bracket search:
//! - [`NearestNeighborInterpolant`](interpolation::nearest::NearestNeighborInterpolant)
//! - [`LinearInterpolant`](interpolation::linear::LinearInterpolant)
//! - [`CommonLogarithmicInterpolant`](interpolation::logarithmic::CommonLogarithmicInterpolant)
//!
//! ```
//! use ni::interpolation::Interpolator;
//! use ni::interpolation::linear::LinearInterpolant;
//!
//! let lin = LinearInterpolant::with_data_points(&[0.0, 2.0], &[0.0, 10.0]).unwrap();
//! assert_eq!(lin.eval(1.0), 5.0);
//! assert_eq!(lin.eval(3.0), 0.0); // no extrapolation
//! ```

pub mod interpolation;
