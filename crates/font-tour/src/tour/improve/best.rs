//! Parallel best-improvement relocation.

use rayon::prelude::*;

use crate::{DistanceMatrix, DistanceValue, Tour, utils::partial_order};

use super::{Improve, Improvement, commit_if_shorter, relocation_delta};

/// Best-improvement local search over single-item relocations.
///
/// Each pass scores every ordered pair of positions in parallel and commits the single move with the largest decrease, preferring the lowest `(i, j)` among
/// equal decreases. If the recomputed path length rejects that move, the next best move is tried. The search ends after a pass in which no move
/// shortens the path. This usually reaches a different local optimum than [`FirstRelocation`](super::FirstRelocation).
#[derive(Clone, Copy, Debug, Default)]
pub struct BestRelocation;

impl<T: DistanceValue + Send + Sync> Improve<T> for BestRelocation {
    fn name(&self) -> String {
        "BestRelocation".to_string()
    }

    fn improve(&self, mut tour: Tour, matrix: &DistanceMatrix<T>) -> Improvement<T> {
        let n = tour.len();
        let initial_length = tour.path_length(matrix);
        let mut best = initial_length;
        let mut history = Vec::new();

        if n > 2 {
            loop {
                let moves = improving_moves(tour.indices(), matrix);
                let Some((length, i, j)) = commit_best(&mut tour, matrix, moves, best) else {
                    break;
                };
                best = length;
                history.push(length);
                ftlog::info!("Moved item from position {i} to {j}, new best path length: {length:.4}");
            }
        }

        ftlog::info!(
            "{} converged after {} moves: {initial_length:.4} -> {best:.4}",
            <Self as Improve<T>>::name(self),
            history.len()
        );
        Improvement {
            tour,
            initial_length,
            history,
        }
    }
}

/// Scores every relocation in parallel and returns those with a negative delta, best first.
///
/// Equal deltas are ordered by `(from, to)`.
fn improving_moves<T: DistanceValue + Send + Sync>(indices: &[usize], matrix: &DistanceMatrix<T>) -> Vec<(T, usize, usize)> {
    let n = indices.len();
    let mut moves = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
        .map(|(i, j)| (relocation_delta(indices, matrix, i, j), i, j))
        .filter(|&(delta, _, _)| delta < T::zero())
        .collect::<Vec<_>>();
    moves.par_sort_unstable_by(|a, b| partial_order(&a.0, &b.0).then_with(|| (a.1, a.2).cmp(&(b.1, b.2))));
    moves
}

/// Commits the first of `moves` that brings the recomputed path length below `best`.
///
/// Returns the new length and the committed move.
fn commit_best<T: DistanceValue>(tour: &mut Tour, matrix: &DistanceMatrix<T>, moves: Vec<(T, usize, usize)>, best: T) -> Option<(T, usize, usize)> {
    moves.into_iter().find_map(|(_, i, j)| {
        let length = commit_if_shorter(tour, matrix, i, j, best);
        if length.is_none() {
            ftlog::debug!("Move {i} -> {j} does not shorten the recomputed path. Trying the next one.");
        }
        length.map(|length| (length, i, j))
    })
}
