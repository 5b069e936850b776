//! Density groups over a tour.

use serde::{Deserialize, Serialize};

use crate::{DistanceValue, Tour, utils::partial_order};

/// The percentiles at which the densities are split by default.
pub const QUARTILES: [f64; 3] = [25.0, 50.0, 75.0];

/// Labels for the buckets produced by splitting at the [`QUARTILES`], from lightest to heaviest.
pub const QUARTILE_LABELS: [&str; 4] = ["featherweight", "thin", "regular", "bold"];

/// Computes the given percentiles of `values` using linear interpolation between the closest ranks.
///
/// # Errors
///
/// - If `values` is empty or contains NaN.
/// - If a percentile is outside `[0, 100]`.
pub fn percentile_thresholds<T: DistanceValue>(values: &[T], percentiles: &[f64]) -> Result<Vec<T>, String> {
    if values.is_empty() {
        return Err("Cannot compute percentiles of an empty set of values.".to_string());
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err("Cannot compute percentiles of NaN values.".to_string());
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(partial_order);
    let last = sorted.len() - 1;

    percentiles
        .iter()
        .map(|&p| {
            if !(0.0..=100.0).contains(&p) {
                return Err(format!("Percentile {p} is outside [0, 100]."));
            }
            #[expect(clippy::cast_precision_loss)]
            let rank = p / 100.0 * last as f64;
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let (lo, hi) = (rank.floor() as usize, rank.ceil() as usize);
            let fraction = T::from_float(rank - rank.floor());
            Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * fraction)
        })
        .collect()
}

/// Returns the bucket of a density: the first threshold it does not exceed, or `thresholds.len()` if it exceeds all of them.
pub fn bucket_of<T: DistanceValue>(density: T, thresholds: &[T]) -> usize {
    thresholds.iter().position(|&t| density <= t).unwrap_or(thresholds.len())
}

/// A partition of a tour into density buckets.
///
/// There is one more bucket than thresholds. Each bucket keeps the relative order of the tour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Groups<T> {
    /// The ascending thresholds between buckets.
    thresholds: Vec<T>,
    /// The item indices in each bucket, in tour order.
    buckets: Vec<Vec<usize>>,
}

impl<T: DistanceValue> Groups<T> {
    /// Partitions the `tour` by the `densities` of its items.
    ///
    /// A density equal to a threshold goes to the lower bucket.
    ///
    /// # Errors
    ///
    /// - If `densities` does not have one entry per item of the tour.
    /// - If `thresholds` is not ascending.
    pub fn partition(tour: &Tour, densities: &[T], thresholds: &[T]) -> Result<Self, String> {
        if densities.len() != tour.len() {
            return Err(format!(
                "Got {} densities for a tour of {} items.",
                densities.len(),
                tour.len()
            ));
        }
        if let Some(w) = thresholds.windows(2).find(|w| w[0].is_nan() || w[1].is_nan() || w[0] > w[1]) {
            return Err(format!("Thresholds must be ascending, but {} comes before {}.", w[0], w[1]));
        }

        let mut buckets = vec![Vec::new(); thresholds.len() + 1];
        for &i in tour.indices() {
            buckets[bucket_of(densities[i], thresholds)].push(i);
        }

        Ok(Self {
            thresholds: thresholds.to_vec(),
            buckets,
        })
    }

    /// Returns the thresholds between buckets.
    #[must_use]
    pub fn thresholds(&self) -> &[T] {
        &self.thresholds
    }

    /// Returns all buckets, from lowest to highest density.
    #[must_use]
    pub fn buckets(&self) -> &[Vec<usize>] {
        &self.buckets
    }

    /// Returns the item indices in bucket `b`, in tour order.
    #[must_use]
    pub fn bucket(&self, b: usize) -> Option<&[usize]> {
        self.buckets.get(b).map(Vec::as_slice)
    }

    /// Returns the number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns whether every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Returns the number of items in each bucket.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Returns a label for bucket `b`, or `None` if there is no such bucket.
    ///
    /// With four buckets these are the [`QUARTILE_LABELS`]. Otherwise, buckets are labelled `group-<b + 1>`.
    #[must_use]
    pub fn label(&self, b: usize) -> Option<String> {
        if b >= self.buckets.len() {
            None
        } else if self.buckets.len() == QUARTILE_LABELS.len() {
            QUARTILE_LABELS.get(b).map(ToString::to_string)
        } else {
            Some(format!("group-{}", b + 1))
        }
    }

    /// Returns the labels of all buckets, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        (0..self.buckets.len()).filter_map(|b| self.label(b)).collect()
    }
}
