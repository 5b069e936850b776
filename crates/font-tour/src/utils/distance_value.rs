//! A trait for types that can be used as distance values.

use core::fmt::{Debug, Display};

/// A trait for types that can be used as distance values, densities and feature components.
///
/// Euclidean distances need a square root, so only floating-point types qualify. We provide a blanket implementation for all types that satisfy the trait
/// bounds, which includes `f32` and `f64`.
#[must_use]
pub trait DistanceValue: num_traits::Float + num_traits::NumAssign + Copy + Display + Debug + Default + std::iter::Sum {
    /// Converts an `f64` into this type, saturating to infinity when it does not fit.
    fn from_float(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::infinity)
    }

    /// Converts the value into an `f64`.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

/// Blanket implementation of `DistanceValue` for all types that satisfy the trait bounds.
impl<T> DistanceValue for T where T: num_traits::Float + num_traits::NumAssign + Copy + Display + Debug + Default + std::iter::Sum {}
