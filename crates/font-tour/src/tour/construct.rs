//! Greedy construction of an initial tour.

use crate::{DistanceMatrix, DistanceValue, Tour};

/// Returns the pair of items with the largest distance, as `(i, j, distance)` with `i < j`.
///
/// Pairs are scanned with `i` ascending and then `j` ascending, and ties go to the first pair encountered.
///
/// # Errors
///
/// If the matrix covers fewer than two items.
pub fn farthest_pair<T: DistanceValue>(matrix: &DistanceMatrix<T>) -> Result<(usize, usize, T), String> {
    scan_farthest(matrix).ok_or_else(|| {
        format!(
            "Cannot find the farthest pair among {} items. At least two are needed.",
            matrix.cardinality()
        )
    })
}

/// Builds an initial tour with a farthest-pair seed and nearest-neighbor extension.
///
/// The tour starts at the first item of the [`farthest_pair`]. The other item of that pair gets no special treatment. The tour then repeatedly moves to the
/// closest unvisited item, breaking ties by lowest index.
///
/// Batches with fewer than two items produce the trivial tour.
pub fn construct_greedy<T: DistanceValue>(matrix: &DistanceMatrix<T>) -> Tour {
    let n = matrix.cardinality();
    let Some((seed, _, max_distance)) = scan_farthest(matrix) else {
        return Tour::identity(n);
    };
    ftlog::info!("Seeding tour at item {seed}, one end of the farthest pair with distance {max_distance:.4}.");

    let mut visited = vec![false; n];
    visited[seed] = true;
    let mut path = Vec::with_capacity(n);
    path.push(seed);

    let mut current = seed;
    let progress_step = (n / 100).max(1);
    while path.len() < n {
        if path.len() % progress_step == 0 {
            ftlog::debug!("Greedy extension {} %", 100 * path.len() / n);
        }

        let row = matrix.row(current);
        let next = (0..n)
            .filter(|&j| !visited[j])
            .fold(None, |best: Option<(usize, T)>, j| match best {
                Some((_, d)) if d <= row[j] => best,
                _ => Some((j, row[j])),
            })
            .map_or_else(|| unreachable!("the path is shorter than n, so some item is unvisited"), |(j, _)| j);

        visited[next] = true;
        path.push(next);
        current = next;
    }

    let tour = Tour::from_permutation(path);
    ftlog::info!("Greedy tour built with path length {:.4}.", tour.path_length(matrix));
    tour
}

/// Scans all unordered pairs for the largest distance. Returns `None` for fewer than two items.
fn scan_farthest<T: DistanceValue>(matrix: &DistanceMatrix<T>) -> Option<(usize, usize, T)> {
    let n = matrix.cardinality();
    if n < 2 {
        return None;
    }

    let mut best = (0, 1, matrix.get(0, 1));
    for i in 0..n {
        let row = matrix.row(i);
        for (j, &d) in row.iter().enumerate().skip(i + 1) {
            if d > best.2 {
                best = (i, j, d);
            }
        }
    }
    Some(best)
}
