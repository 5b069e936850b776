//! Local search over single-item relocations.

mod best;
mod first;

use serde::{Deserialize, Serialize};

use crate::{DistanceMatrix, DistanceValue, Tour};

pub use best::BestRelocation;
pub use first::FirstRelocation;

/// The outcome of running an [`Improve`] algorithm on a tour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Improvement<T> {
    /// The converged tour.
    pub tour: Tour,
    /// The path length of the tour before any move was committed.
    pub initial_length: T,
    /// The best path length after each committed move, in commit order. This is strictly decreasing.
    pub history: Vec<T>,
}

impl<T: DistanceValue> Improvement<T> {
    /// Returns the path length of the converged tour.
    pub fn final_length(&self) -> T {
        self.history.last().copied().unwrap_or(self.initial_length)
    }

    /// Returns the number of committed moves.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.len()
    }
}

/// A local-search algorithm that shortens a tour.
pub trait Improve<T: DistanceValue> {
    /// Returns a name for the algorithm.
    ///
    /// This is intended for diagnostic use.
    fn name(&self) -> String;

    /// Shortens the `tour` until no move of the algorithm's neighborhood improves it.
    fn improve(&self, tour: Tour, matrix: &DistanceMatrix<T>) -> Improvement<T>;
}

/// The available relocation strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Sequential first-improvement. See [`FirstRelocation`].
    #[default]
    First,
    /// Parallel best-improvement per pass. See [`BestRelocation`].
    Best,
}

impl<T: DistanceValue + Send + Sync> Improve<T> for Strategy {
    fn name(&self) -> String {
        match self {
            Self::First => <FirstRelocation as Improve<T>>::name(&FirstRelocation),
            Self::Best => <BestRelocation as Improve<T>>::name(&BestRelocation),
        }
    }

    fn improve(&self, tour: Tour, matrix: &DistanceMatrix<T>) -> Improvement<T> {
        match self {
            Self::First => FirstRelocation.improve(tour, matrix),
            Self::Best => BestRelocation.improve(tour, matrix),
        }
    }
}

/// Returns the change in path length from removing the item at position `from` and reinserting it at position `to` of the shortened sequence.
///
/// Only the edges around the two positions change, so this takes constant time.
pub(crate) fn relocation_delta<T: DistanceValue>(indices: &[usize], matrix: &DistanceMatrix<T>, from: usize, to: usize) -> T {
    let n = indices.len();
    let x = indices[from];
    let mut delta = T::zero();

    let prev = from.checked_sub(1).map(|p| indices[p]);
    let next = indices.get(from + 1).copied();
    if let Some(p) = prev {
        delta -= matrix.get(p, x);
    }
    if let Some(q) = next {
        delta -= matrix.get(x, q);
    }
    if let (Some(p), Some(q)) = (prev, next) {
        delta += matrix.get(p, q);
    }

    // Position `k` of the sequence with `from` removed.
    let shortened = |k: usize| if k < from { indices[k] } else { indices[k + 1] };
    let left = to.checked_sub(1).map(shortened);
    let right = (to + 1 < n).then(|| shortened(to));
    if let Some(l) = left {
        delta += matrix.get(l, x);
    }
    if let Some(r) = right {
        delta += matrix.get(x, r);
    }
    if let (Some(l), Some(r)) = (left, right) {
        delta -= matrix.get(l, r);
    }

    delta
}

/// Applies the relocation to `tour` only if the recomputed path length is strictly below `best`, and returns the new length.
///
/// The constant-time delta can suggest an improvement that is only rounding noise, so the full length decides.
pub(crate) fn commit_if_shorter<T: DistanceValue>(tour: &mut Tour, matrix: &DistanceMatrix<T>, from: usize, to: usize, best: T) -> Option<T> {
    let mut candidate = tour.clone();
    candidate.shift(from, to);
    let length = candidate.path_length(matrix);
    if length < best {
        *tour = candidate;
        Some(length)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::relocation_delta;
    use crate::{DistanceMatrix, Tour};

    #[test]
    fn delta_matches_recomputed_length() -> Result<(), String> {
        let points = vec![vec![0.0, 0.0], vec![3.0, 1.0], vec![1.0, 5.0], vec![-2.0, 2.0], vec![4.0, -3.0], vec![0.5, 0.5]];
        let matrix = DistanceMatrix::<f64>::new(&points)?;
        let tour = Tour::new(vec![2, 0, 5, 4, 1, 3])?;
        let before = tour.path_length(&matrix);

        for from in 0..tour.len() {
            for to in 0..tour.len() {
                let mut moved = tour.clone();
                moved.relocate(from, to)?;
                let expected = moved.path_length(&matrix) - before;
                let actual = relocation_delta(tour.indices(), &matrix, from, to);
                assert!((expected - actual).abs() < 1e-9, "from {from} to {to}: expected {expected}, got {actual}");
            }
        }
        Ok(())
    }
}
