//! Sequential first-improvement relocation.

use crate::{DistanceMatrix, DistanceValue, Tour};

use super::{Improve, Improvement, commit_if_shorter, relocation_delta};

/// First-improvement local search over single-item relocations.
///
/// Every ordered pair of positions `(i, j)` with `i != j` is tried in order. The first move that strictly shortens the path is committed, and the scan
/// restarts from position `0`. The search ends after a full scan without an improving move.
///
/// A move is only tried when its constant-time delta is negative, and is only committed when the recomputed path length is strictly shorter. Both checks
/// agree except for rounding noise, where a move the delta scores as neutral is skipped without recomputing the length.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstRelocation;

impl<T: DistanceValue> Improve<T> for FirstRelocation {
    fn name(&self) -> String {
        "FirstRelocation".to_string()
    }

    fn improve(&self, mut tour: Tour, matrix: &DistanceMatrix<T>) -> Improvement<T> {
        let n = tour.len();
        let initial_length = tour.path_length(matrix);
        let mut best = initial_length;
        let mut history = Vec::new();

        if n > 2 {
            'scan: loop {
                for i in 0..n {
                    for j in (0..n).filter(|&j| j != i) {
                        if relocation_delta(tour.indices(), matrix, i, j) >= T::zero() {
                            continue;
                        }
                        if let Some(length) = commit_if_shorter(&mut tour, matrix, i, j, best) {
                            best = length;
                            history.push(length);
                            ftlog::info!("Moved item from position {i} to {j}, new best path length: {length:.4}");
                            continue 'scan;
                        }
                    }
                }
                break;
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
