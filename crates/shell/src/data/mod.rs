//! Loading fonts and their precomputed features from disk.
//!
//! A font `<dir>/<family>/<style>.ttf` is loaded when both `<style>.ttf.features.npy` and `<style>.ttf.density` sit next to it. The font is named
//! `<family>_<style>`.

use std::path::{Path, PathBuf};

use font_tour::{Batch, Item};
use ndarray::ArrayD;

/// The suffix appended to a font's path for its feature vector.
pub const FEATURES_SUFFIX: &str = ".features.npy";

/// The suffix appended to a font's path for its glyph density.
pub const DENSITY_SUFFIX: &str = ".density";

/// Loads every font under `font_dir` that has both a feature vector and a density.
///
/// Fonts are sorted by name before indices are assigned, so the same directory always produces the same batch.
///
/// # Errors
///
/// - If the directory cannot be read.
/// - If a feature or density file cannot be parsed.
/// - If no font could be loaded, or the batch is otherwise invalid. See [`Batch::new`].
pub fn load_fonts<P: AsRef<Path>>(font_dir: P) -> Result<Batch<f64>, String> {
    let font_dir = font_dir.as_ref();
    if !font_dir.is_dir() {
        return Err(format!("Font directory '{}' does not exist.", font_dir.display()));
    }

    let mut ttf_files = Vec::new();
    collect_ttf_files(font_dir, &mut ttf_files)?;
    ftlog::info!("Found {} font files under {font_dir:?}", ttf_files.len());

    let mut items = Vec::with_capacity(ttf_files.len());
    for ttf_path in ttf_files {
        let features_path = with_suffix(&ttf_path, FEATURES_SUFFIX);
        let density_path = with_suffix(&ttf_path, DENSITY_SUFFIX);
        if !features_path.exists() || !density_path.exists() {
            ftlog::warn!("Skipping {ttf_path:?}: missing features or density.");
            continue;
        }

        let name = font_name(&ttf_path)?;
        let features = read_features(&features_path)?;
        let density = read_density(&density_path)?;
        items.push(Item::new(name, features, density));
    }

    if items.is_empty() {
        return Err(format!("No fonts with features and densities found in '{}'.", font_dir.display()));
    }
    items.sort_by(|a, b| a.name().cmp(b.name()));
    Batch::new(items)
}

/// Recursively collects the paths of all `.ttf` files under `dir`.
fn collect_ttf_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = std::fs::read_dir(dir).map_err(|e| format!("Failed to read directory {}: {e}", dir.display()))?;
    for entry in entries {
        let path = entry.map_err(|e| e.to_string())?.path();
        if path.is_dir() {
            collect_ttf_files(&path, out)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some("ttf") {
            out.push(path);
        }
    }
    Ok(())
}

/// Appends `suffix` to the full file name of `path`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Names a font after its parent directory and file stem.
fn font_name(ttf_path: &Path) -> Result<String, String> {
    let stem = ttf_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Failed to get file stem of {}", ttf_path.display()))?;
    let family = ttf_path
        .parent()
        .and_then(Path::file_name)
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    Ok(format!("{family}_{stem}"))
}

/// Reads a feature vector from an npy file of `f64` or `f32` values, flattened in logical order.
fn read_features(path: &Path) -> Result<Vec<f64>, String> {
    match ndarray_npy::read_npy::<_, ArrayD<f64>>(path) {
        Ok(array) => Ok(array.iter().copied().collect()),
        Err(f64_err) => ndarray_npy::read_npy::<_, ArrayD<f32>>(path)
            .map(|array| array.iter().copied().map(f64::from).collect())
            .map_err(|f32_err| format!("Error loading features from {}: {f64_err}; {f32_err}", path.display())),
    }
}

/// Reads a density from the first line of a text file.
fn read_density(path: &Path) -> Result<f64, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read density file {}: {e}", path.display()))?;
    let line = contents.lines().next().unwrap_or_default().trim();
    line.parse::<f64>()
        .map_err(|e| format!("Failed to parse density '{line}' in {}: {e}", path.display()))
}

/// Reads a list of font names, one per line, skipping blank lines.
pub fn read_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>, String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read font list {}: {e}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}
