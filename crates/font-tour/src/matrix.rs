//! The pairwise distance matrix of a batch.

use rayon::prelude::*;

use crate::{Batch, DistanceValue, metric::euclidean};

/// A symmetric matrix of Euclidean distances between all pairs of items, stored row-major.
///
/// The diagonal is zero. Each unordered pair is computed once and mirrored.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix<T> {
    /// The number of rows (and columns).
    cardinality: usize,
    /// The distances, row-major.
    values: Vec<T>,
}

impl<T: DistanceValue> DistanceMatrix<T> {
    /// Computes the distance matrix of the given feature vectors.
    ///
    /// # Errors
    ///
    /// If the vectors do not all have the same length.
    pub fn new<S: AsRef<[T]>>(vectors: &[S]) -> Result<Self, String> {
        check_dimensionality(vectors)?;
        let n = vectors.len();

        let upper = vectors
            .iter()
            .enumerate()
            .map(|(i, x)| {
                ftlog::debug!("Calculating distance matrix row {i}/{n}");
                vectors[(i + 1)..].iter().map(|y| euclidean(x, y)).collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        ftlog::info!("Calculated distance matrix for {n} items.");
        Ok(Self::mirror(n, upper))
    }

    /// Parallel version of [`Self::new`].
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn par_new<S: AsRef<[T]> + Send + Sync>(vectors: &[S]) -> Result<Self, String>
    where
        T: Send + Sync,
    {
        check_dimensionality(vectors)?;
        let n = vectors.len();

        let upper = vectors
            .par_iter()
            .enumerate()
            .map(|(i, x)| {
                ftlog::debug!("Calculating distance matrix row {i}/{n}");
                vectors[(i + 1)..].iter().map(|y| euclidean(x, y)).collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        ftlog::info!("Calculated distance matrix for {n} items in parallel.");
        Ok(Self::mirror(n, upper))
    }

    /// Computes the distance matrix of the feature vectors in a batch.
    ///
    /// A `Batch` has already checked its dimensionality, so this cannot fail.
    pub fn from_batch(batch: &Batch<T>) -> Self {
        let features = batch.features();
        Self::new(&features).unwrap_or_else(|_| unreachable!("a Batch has uniform dimensionality"))
    }

    /// Parallel version of [`Self::from_batch`].
    pub fn par_from_batch(batch: &Batch<T>) -> Self
    where
        T: Send + Sync,
    {
        let features = batch.features();
        Self::par_new(&features).unwrap_or_else(|_| unreachable!("a Batch has uniform dimensionality"))
    }

    /// Builds the full matrix from the strict upper triangle, where `upper[i][k]` is the distance between `i` and `i + 1 + k`.
    fn mirror(n: usize, upper: Vec<Vec<T>>) -> Self {
        let mut values = vec![T::zero(); n * n];
        for (i, row) in upper.into_iter().enumerate() {
            for (k, d) in row.into_iter().enumerate() {
                let j = i + 1 + k;
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { cardinality: n, values }
    }

    /// Returns the number of items covered by the matrix.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Returns the distance between items `i` and `j`.
    ///
    /// # Panics
    ///
    /// If either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[i * self.cardinality + j]
    }

    /// Returns the distances from item `i` to every item.
    ///
    /// # Panics
    ///
    /// If `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        &self.values[(i * self.cardinality)..((i + 1) * self.cardinality)]
    }
}

/// Checks that all vectors have the same length as the first.
fn check_dimensionality<S: AsRef<[T]>, T>(vectors: &[S]) -> Result<(), String> {
    let Some(dim) = vectors.first().map(|v| v.as_ref().len()) else {
        return Ok(());
    };
    vectors
        .iter()
        .enumerate()
        .find(|(_, v)| v.as_ref().len() != dim)
        .map_or(Ok(()), |(i, v)| {
            Err(format!(
                "Feature vector {i} has {} dimensions but vector 0 has {dim}.",
                v.as_ref().len()
            ))
        })
}
