//! Ordering fonts and writing the results.

use std::path::Path;

use font_tour::{
    Batch, DistanceMatrix, Groups,
    groups::percentile_thresholds,
    report::{Summary, write_names},
    tour::{Improve, Strategy, construct_greedy},
};

/// The file name of the ordered list of all fonts.
pub const ORDERED_LIST: &str = "ordered_fonts_list.txt";

/// The file name of the run summary.
pub const SUMMARY: &str = "summary.json";

/// Orders the fonts and writes the results to `out_dir`.
///
/// This writes the ordered list of all fonts, one list per non-empty density group, and a JSON summary of the run.
///
/// # Arguments
///
/// - `batch`: The fonts to order.
/// - `matrix`: The distance matrix of the batch.
/// - `strategy`: The local search used to shorten the greedy path.
/// - `thresholds`: Explicit density thresholds. If `None`, they are computed from the `percentiles` of the densities.
/// - `percentiles`: The percentiles to split the densities at.
/// - `out_dir`: The output directory.
///
/// # Errors
///
/// - If the thresholds are invalid. See [`Groups::partition`] and [`percentile_thresholds`].
/// - If any output file cannot be written.
pub fn sort_fonts<P: AsRef<Path>>(
    batch: &Batch<f64>,
    matrix: &DistanceMatrix<f64>,
    strategy: Strategy,
    thresholds: Option<Vec<f64>>,
    percentiles: &[f64],
    out_dir: P,
) -> Result<(), String> {
    let out_dir = out_dir.as_ref();
    crate::utils::ensure_dir(out_dir)?;

    let greedy = construct_greedy(matrix);
    println!("Font path computed. Final path length: {:.2}", greedy.path_length(matrix));

    let improvement = strategy.improve(greedy, matrix);
    println!(
        "Improved font path computed with {} moves. Final path length: {:.2}",
        improvement.moves(),
        improvement.final_length()
    );

    let densities = batch.densities();
    let thresholds = match thresholds {
        Some(thresholds) => thresholds,
        None => percentile_thresholds(&densities, percentiles)?,
    };
    ftlog::info!("Density thresholds: {thresholds:?}");
    let groups = Groups::partition(&improvement.tour, &densities, &thresholds)?;

    write_list(&out_dir.join(ORDERED_LIST), batch, improvement.tour.indices())?;
    for (b, (bucket, label)) in groups.buckets().iter().zip(groups.labels()).enumerate() {
        if bucket.is_empty() {
            ftlog::warn!("No fonts in group {}", b + 1);
            println!("No fonts in group {}", b + 1);
            continue;
        }
        let path = out_dir.join(format!("font_samples_{}_{label}.txt", b + 1));
        write_list(&path, batch, bucket)?;
    }

    let summary = Summary::new(batch, &strategy, &improvement, &groups);
    let contents = serde_json::to_string_pretty(&summary).map_err(|e| format!("Failed to serialize summary: {e}"))?;
    let summary_path = out_dir.join(SUMMARY);
    std::fs::write(&summary_path, contents).map_err(|e| format!("Failed to write {summary_path:?}: {e}"))?;

    println!("Font lists saved to {}", out_dir.display());
    Ok(())
}

/// Writes the names of the fonts at `indices` to a new file at `path`.
fn write_list(path: &Path, batch: &Batch<f64>, indices: &[usize]) -> Result<(), String> {
    let file = std::fs::File::create(path).map_err(|e| format!("Failed to create font list {path:?}: {e}"))?;
    let mut writer = std::io::BufWriter::new(file);
    write_names(&mut writer, batch, indices)?;
    ftlog::info!("Wrote {} font names to {path:?}", indices.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use font_tour::{Batch, DistanceMatrix, Item, tour::Strategy};
    use tempdir::TempDir;

    use super::{ORDERED_LIST, SUMMARY, sort_fonts};

    fn two_pairs() -> Result<Batch<f64>, String> {
        Batch::new(vec![
            Item::new("a", vec![0.0, 0.0], 0.1),
            Item::new("b", vec![0.0, 1.0], 0.4),
            Item::new("c", vec![10.0, 10.0], 0.6),
            Item::new("d", vec![10.0, 11.0], 0.9),
        ])
    }

    #[test]
    fn writes_lists_and_summary() -> Result<(), String> {
        let tmp = TempDir::new("sorted").map_err(|e| e.to_string())?;
        let batch = two_pairs()?;
        let matrix = DistanceMatrix::from_batch(&batch);

        sort_fonts(&batch, &matrix, Strategy::First, Some(vec![0.25, 0.5, 0.75]), &[], tmp.path())?;

        let ordered = std::fs::read_to_string(tmp.path().join(ORDERED_LIST)).map_err(|e| e.to_string())?;
        assert_eq!(ordered, "a\nb\nc\nd\n");
        for (k, (label, name)) in [("featherweight", "a"), ("thin", "b"), ("regular", "c"), ("bold", "d")].iter().enumerate() {
            let path = tmp.path().join(format!("font_samples_{}_{label}.txt", k + 1));
            let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
            assert_eq!(contents, format!("{name}\n"));
        }

        let summary = std::fs::read_to_string(tmp.path().join(SUMMARY)).map_err(|e| e.to_string())?;
        let summary: serde_json::Value = serde_json::from_str(&summary).map_err(|e| e.to_string())?;
        assert_eq!(summary["cardinality"], 4);
        assert_eq!(summary["strategy"], "FirstRelocation");
        Ok(())
    }

    #[test]
    fn empty_groups_are_not_written() -> Result<(), String> {
        let tmp = TempDir::new("sorted").map_err(|e| e.to_string())?;
        let batch = two_pairs()?;
        let matrix = DistanceMatrix::from_batch(&batch);

        sort_fonts(&batch, &matrix, Strategy::Best, Some(vec![0.5]), &[], tmp.path())?;
        assert!(tmp.path().join("font_samples_1_group-1.txt").exists());
        assert!(tmp.path().join("font_samples_2_group-2.txt").exists());

        sort_fonts(&batch, &matrix, Strategy::Best, Some(vec![1.0]), &[], tmp.path().join("all-light"))?;
        assert!(tmp.path().join("all-light").join("font_samples_1_group-1.txt").exists());
        assert!(!tmp.path().join("all-light").join("font_samples_2_group-2.txt").exists());
        Ok(())
    }
}
