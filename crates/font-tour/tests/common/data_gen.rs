//! Data generation utilities for testing.

use font_tour::{Batch, Item};
use rand::prelude::*;

pub fn tabular(car: usize, dim: usize, min: f64, max: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car).map(|_| (0..dim).map(|_| rng.random_range(min..max)).collect()).collect()
}

pub fn densities(car: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car).map(|_| rng.random_range(0.0..1.0)).collect()
}

/// Two tight pairs far apart: (0, 0), (0, 1), (10, 10), (10, 11).
pub fn two_pairs() -> Vec<Vec<f64>> {
    vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![10.0, 10.0], vec![10.0, 11.0]]
}

pub fn batch(features: Vec<Vec<f64>>, densities: &[f64]) -> Result<Batch<f64>, String> {
    let items = features
        .into_iter()
        .zip(densities)
        .enumerate()
        .map(|(i, (f, &d))| Item::new(format!("font-{i}"), f, d))
        .collect();
    Batch::new(items)
}

/// Points `0, 1, ..., n - 1` on a line.
pub fn line(n: usize) -> Vec<Vec<f64>> {
    (0..n).map(|i| vec![i as f64]).collect()
}
