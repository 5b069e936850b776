//! Utility functions for the crate.

mod distance_value;

pub use distance_value::DistanceValue;

/// Compares two floats, treating incomparable values as equal.
pub(crate) fn partial_order<T: PartialOrd>(a: &T, b: &T) -> core::cmp::Ordering {
    a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal)
}
