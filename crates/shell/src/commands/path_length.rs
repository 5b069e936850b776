//! Measuring an ordered list of fonts.

use std::path::Path;

use font_tour::{Batch, DistanceMatrix, report::path_length};

/// Reads an ordered list of font names and returns its path length.
///
/// The list does not have to cover the whole batch.
///
/// # Errors
///
/// - If the list cannot be read.
/// - If a name in the list is not in the batch.
pub fn measure_list<P: AsRef<Path>>(batch: &Batch<f64>, matrix: &DistanceMatrix<f64>, order: P) -> Result<f64, String> {
    let names = crate::data::read_names(&order)?;
    let indices = batch.indices_of(&names)?;
    let length = path_length(&indices, matrix);
    ftlog::info!("Path length of {} fonts in {:?}: {length}", indices.len(), order.as_ref());
    Ok(length)
}
