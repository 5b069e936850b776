//! Path lengths, nearest-neighbor queries and serialization of results.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    Batch, DistanceMatrix, DistanceValue, Groups,
    tour::{Improve, Improvement},
    utils::partial_order,
};

/// Returns the sum of the distances between consecutive items of `indices`.
///
/// Sequences with fewer than two items have length zero.
pub fn path_length<T: DistanceValue>(indices: &[usize], matrix: &DistanceMatrix<T>) -> T {
    indices.windows(2).map(|w| matrix.get(w[0], w[1])).sum()
}

/// A neighbor found by [`nearest`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighbor<T> {
    /// The index of the neighbor in the batch.
    pub index: usize,
    /// The name of the neighbor.
    pub name: String,
    /// The distance from the query font.
    pub distance: T,
}

/// Returns the `n` fonts closest to the font called `name`, excluding the font itself.
///
/// Neighbors are sorted by distance, with ties broken by index. Fewer than `n` neighbors are returned when the batch is too small.
///
/// # Errors
///
/// - If `name` is not in the batch. This is a lookup failure and callers may carry on with other queries.
/// - If the batch and matrix have different cardinalities.
pub fn nearest<T: DistanceValue>(batch: &Batch<T>, matrix: &DistanceMatrix<T>, name: &str, n: usize) -> Result<Vec<Neighbor<T>>, String> {
    check_cardinality(batch, matrix)?;
    let index = batch
        .index_of(name)
        .ok_or_else(|| format!("Font name '{name}' not found in the list of font names."))?;

    let mut hits = matrix
        .row(index)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .collect::<Vec<_>>();
    hits.sort_by(|(a, da), (b, db)| partial_order(da, db).then_with(|| a.cmp(b)));
    hits.truncate(n);

    Ok(hits
        .into_iter()
        .map(|(j, distance)| Neighbor {
            index: j,
            name: batch.items()[j].name().to_string(),
            distance,
        })
        .collect())
}

/// Writes the names of the items at `indices`, one per line.
///
/// # Errors
///
/// - If an index is not in the batch.
/// - If writing fails.
pub fn write_names<T: DistanceValue, W: Write>(writer: &mut W, batch: &Batch<T>, indices: &[usize]) -> Result<(), String> {
    for &i in indices {
        let name = batch
            .name(i)
            .ok_or_else(|| format!("Index {i} is out of bounds for a batch of {} items.", batch.cardinality()))?;
        writeln!(writer, "{name}").map_err(|e| format!("Failed to write font name: {e}"))?;
    }
    writer.flush().map_err(|e| format!("Failed to flush font names: {e}"))
}

/// A summary of one run through the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary<T> {
    /// The number of fonts.
    pub cardinality: usize,
    /// The length of every feature vector.
    pub dimensionality: usize,
    /// The name of the improvement algorithm.
    pub strategy: String,
    /// The path length of the greedy tour.
    pub initial_length: T,
    /// The path length of the improved tour.
    pub final_length: T,
    /// The number of moves committed by the improvement algorithm.
    pub moves: usize,
    /// The thresholds between density groups.
    pub thresholds: Vec<T>,
    /// The labels of the density groups.
    pub group_labels: Vec<String>,
    /// The number of fonts in each density group.
    pub group_sizes: Vec<usize>,
}

impl<T: DistanceValue> Summary<T> {
    /// Summarizes the results of a run.
    pub fn new<Alg: Improve<T>>(batch: &Batch<T>, algorithm: &Alg, improvement: &Improvement<T>, groups: &Groups<T>) -> Self {
        Self {
            cardinality: batch.cardinality(),
            dimensionality: batch.dimensionality(),
            strategy: algorithm.name(),
            initial_length: improvement.initial_length,
            final_length: improvement.final_length(),
            moves: improvement.moves(),
            thresholds: groups.thresholds().to_vec(),
            group_labels: groups.labels(),
            group_sizes: groups.sizes(),
        }
    }
}

/// Checks that the batch and matrix describe the same items.
fn check_cardinality<T: DistanceValue>(batch: &Batch<T>, matrix: &DistanceMatrix<T>) -> Result<(), String> {
    if batch.cardinality() == matrix.cardinality() {
        Ok(())
    } else {
        Err(format!(
            "The batch has {} items but the distance matrix covers {}.",
            batch.cardinality(),
            matrix.cardinality()
        ))
    }
}
