use crate::analysis::sorted_counts;
use crate::foundation::utils::{normalize_unicode, sanitize_file_name};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the aggregated per-genre results.
pub const GENRE_RESULTS_FILE: &str = "genre_results.json";

/// Writes one artist's word counts to the results directory.
///
/// The file is a JSON array of `[word, count]` pairs sorted by count
/// descending, named after the normalized artist name. Returns the path of
/// the written file.
pub fn write_artist_report(
    results_dir: &Path,
    artist_name: &str,
    counts: &HashMap<String, u64>,
) -> io::Result<PathBuf> {
    fs::create_dir_all(results_dir)?;

    let path = results_dir.join(format!(
        "{}.json",
        sanitize_file_name(&normalize_unicode(artist_name))
    ));
    let serialized = serde_json::to_string_pretty(&sorted_counts(counts))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    fs::write(&path, serialized)?;
    Ok(path)
}

/// Writes the aggregated per-genre word counts to `genre_results.json`.
///
/// Genres are keyed in a `BTreeMap` so the file layout is stable across
/// runs.
pub fn write_genre_report(
    results_dir: &Path,
    genre_counts: &BTreeMap<String, HashMap<String, u64>>,
) -> io::Result<PathBuf> {
    fs::create_dir_all(results_dir)?;

    let sorted: BTreeMap<&str, Vec<(String, u64)>> = genre_counts
        .iter()
        .map(|(genre, counts)| (genre.as_str(), sorted_counts(counts)))
        .collect();

    let path = results_dir.join(GENRE_RESULTS_FILE);
    let serialized = serde_json::to_string_pretty(&sorted)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    fs::write(&path, serialized)?;
    Ok(path)
}
