//! Open-path tours through a batch and the algorithms that build and shorten them.
//!
//! Construction and improvement are independent: any [`Improve`] implementation accepts any valid [`Tour`], so stronger heuristics can replace either phase.

mod construct;
mod improve;

use serde::{Deserialize, Serialize};

use crate::{DistanceMatrix, DistanceValue};

pub use construct::{construct_greedy, farthest_pair};
pub use improve::{BestRelocation, FirstRelocation, Improve, Improvement, Strategy};

/// A visiting order over the items of a batch.
///
/// This is always a permutation of `0..len`. It is an open path; there is no edge from the last item back to the first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    /// The indices of the items in visiting order.
    indices: Vec<usize>,
}

impl Tour {
    /// Creates a `Tour` from the given visiting order.
    ///
    /// # Errors
    ///
    /// If `indices` is not a permutation of `0..indices.len()`.
    pub fn new(indices: Vec<usize>) -> Result<Self, String> {
        let tour = Self { indices };
        if tour.is_valid() {
            Ok(tour)
        } else {
            Err(format!("Tour {:?} is not a permutation of 0..{}.", tour.indices, tour.len()))
        }
    }

    /// Creates a `Tour` that visits the items in index order.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self { indices: (0..n).collect() }
    }

    /// Creates a `Tour` that the caller guarantees is a permutation.
    pub(crate) fn from_permutation(indices: Vec<usize>) -> Self {
        let tour = Self { indices };
        debug_assert!(tour.is_valid(), "not a permutation: {:?}", tour.indices);
        tour
    }

    /// Returns whether the tour visits every index in `0..len` exactly once.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut seen = vec![false; self.indices.len()];
        for &i in &self.indices {
            match seen.get_mut(i) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }

    /// Returns the indices in visiting order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Consumes the tour and returns the indices in visiting order.
    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Returns the number of items in the tour.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns whether the tour is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the sum of the distances between consecutive items.
    pub fn path_length<T: DistanceValue>(&self, matrix: &DistanceMatrix<T>) -> T {
        crate::report::path_length(&self.indices, matrix)
    }

    /// Removes the item at position `from` and reinserts it at position `to` of the shortened sequence.
    ///
    /// # Errors
    ///
    /// If either position is out of bounds.
    pub fn relocate(&mut self, from: usize, to: usize) -> Result<(), String> {
        let n = self.len();
        if from >= n || to >= n {
            return Err(format!("Cannot relocate from {from} to {to} in a tour of length {n}."));
        }
        self.shift(from, to);
        Ok(())
    }

    /// Infallible version of [`Self::relocate`] for positions already known to be in bounds.
    pub(crate) fn shift(&mut self, from: usize, to: usize) {
        if from < to {
            self.indices[from..=to].rotate_left(1);
        } else if to < from {
            self.indices[to..=from].rotate_right(1);
        }
        debug_assert!(self.is_valid(), "relocation broke the permutation: {:?}", self.indices);
    }
}
