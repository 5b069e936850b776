//! Distance functions for feature vectors of the same dimensionality.

use crate::DistanceValue;

/// Euclidean distance between two vectors.
///
/// Also known as the L2-norm, the Euclidean distance is defined as the square-root of the sum of the squared differences between corresponding elements.
pub fn euclidean<S, T>(x: &S, y: &S) -> T
where
    S: AsRef<[T]> + ?Sized,
    T: DistanceValue,
{
    euclidean_sq(x, y).sqrt()
}

/// Squared Euclidean distance between two vectors.
///
/// Elements beyond the length of the shorter vector are ignored. Callers are expected to have checked the dimensionality beforehand.
pub fn euclidean_sq<S, T>(x: &S, y: &S) -> T
where
    S: AsRef<[T]> + ?Sized,
    T: DistanceValue,
{
    x.as_ref()
        .iter()
        .zip(y.as_ref())
        .map(|(&a, &b)| a - b)
        .map(|d| d * d)
        .fold(T::zero(), |acc, v| acc + v)
}
