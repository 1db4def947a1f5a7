use std::collections::BTreeMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{SkipReason, SourceFormat};

/// A validated batch entry: the decoded image together with its source bytes
/// (kept for format-preserving passthrough) and detected format.
pub struct ValidImage {
    pub path: PathBuf,
    pub format: SourceFormat,
    pub image: DynamicImage,
    pub bytes: Vec<u8>,
}

/// A file excluded from the batch, with the reason.
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of scanning one directory.
pub struct DirectoryScan {
    pub valid: Vec<ValidImage>,
    pub skipped: Vec<SkippedFile>,
}

/// List the files directly inside `dir`, sorted by file name.
/// Subdirectories are not descended into.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Files whose basenames collide case-insensitively once the extension is
/// stripped. Such directories cannot be packed without renaming clashes.
/// Returns the colliding groups ordered by stem.
pub fn find_duplicate_stems(files: &[PathBuf]) -> Vec<Vec<PathBuf>> {
    let mut by_stem: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for path in files {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        by_stem.entry(stem).or_default().push(path.clone());
    }
    by_stem
        .into_values()
        .filter(|group| group.len() > 1)
        .collect()
}

/// Read and fully decode one file, classifying failures: an unrecognized
/// container is `UnsupportedFormat`, a recognized container with unreadable
/// pixel data is `CorruptImage`.
pub fn classify_file(path: &Path) -> Result<ValidImage> {
    let bytes = fs::read(path)?;
    let reader = ImageReader::new(Cursor::new(&bytes)).with_guessed_format()?;

    let format = match reader.format().and_then(SourceFormat::from_image_format) {
        Some(format) => format,
        None => {
            return Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let image = reader.decode().map_err(|e| Error::CorruptImage {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!("Decoded {:?}: {} {}x{}", path, format, image.width(), image.height());
    Ok(ValidImage {
        path: path.to_path_buf(),
        format,
        image,
        bytes,
    })
}

/// Scan a directory: decode every file, accumulating valid and skipped lists.
/// Per-file decode failures never abort the batch.
pub fn scan_directory(dir: &Path) -> Result<DirectoryScan> {
    let mut valid = Vec::new();
    let mut skipped = Vec::new();

    for path in list_files(dir)? {
        match classify_file(&path) {
            Ok(img) => valid.push(img),
            Err(Error::UnsupportedFormat { path }) => {
                warn!("Skipping unsupported file: {:?}", path);
                skipped.push(SkippedFile {
                    path,
                    reason: SkipReason::UnsupportedFormat,
                });
            }
            Err(Error::CorruptImage { path, reason }) => {
                warn!("Skipping corrupt file {:?}: {}", path, reason);
                skipped.push(SkippedFile {
                    path,
                    reason: SkipReason::CorruptImage,
                });
            }
            Err(other) => return Err(other),
        }
    }

    Ok(DirectoryScan { valid, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_stems_collide_case_insensitively() {
        let files = vec![
            PathBuf::from("a/Page01.png"),
            PathBuf::from("a/page01.jpg"),
            PathBuf::from("a/page02.png"),
        ];
        let groups = find_duplicate_stems(&files);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn distinct_stems_produce_no_groups() {
        let files = vec![PathBuf::from("a/01.png"), PathBuf::from("a/02.png")];
        assert!(find_duplicate_stems(&files).is_empty());
    }
}
