//! Printing the closest fonts to named fonts.

use font_tour::{Batch, DistanceMatrix, report::nearest};

/// Prints the `k` closest fonts to each named font.
///
/// A name that is not in the batch is reported and skipped. The remaining queries still run.
///
/// Returns the number of names that were found.
pub fn print_nearest(batch: &Batch<f64>, matrix: &DistanceMatrix<f64>, names: &[String], k: usize) -> usize {
    let mut found = 0;
    for name in names {
        match nearest(batch, matrix, name, k) {
            Ok(hits) => {
                found += 1;
                println!("The {k} closest fonts to '{name}' are:");
                for hit in hits {
                    println!("{}\t{:.4}", hit.name, hit.distance);
                }
            }
            Err(e) => {
                ftlog::warn!("{e}");
                println!("{e}");
            }
        }
    }
    found
}
