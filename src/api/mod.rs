//! High-level, ergonomic library API: crop one image to a file, pack
//! directories into CBZ archives, and the in-memory helpers behind both.
//! Prefer these entrypoints over the low-level processing modules when
//! integrating imgtools.
use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{info, warn};

use crate::core::params::{CbzParams, CropParams};
use crate::core::processing::crop::{crop_to_window, default_output_path, save_cropped};
use crate::core::processing::gradient::{build_gradient_map, prepare_image};
use crate::core::processing::search::find_best_window;
use crate::core::processing::transcode::{transcode_image, validate_quality};
use crate::error::Result;
use crate::io::reader::{find_duplicate_stems, list_files, scan_directory};
use crate::io::writers::archive::{ArchiveEntry, sequence_name, write_cbz};
use crate::types::{CropWindow, SkipReason};

/// Locate the crop window with maximum gradient energy in a decoded image.
///
/// Validates the crop size, applies the optional fit-resize, builds the
/// gradient map, and runs the window search. Returns the chosen window
/// together with the (possibly resized) image it refers to.
pub fn find_crop_window(
    img: DynamicImage,
    params: &CropParams,
) -> Result<(DynamicImage, CropWindow)> {
    let prepared = prepare_image(img, params.crop_width, params.crop_height, params.fit)?;
    let map = build_gradient_map(&prepared);
    let window = find_best_window(&map, params.crop_width, params.crop_height);
    Ok((prepared, window))
}

/// Crop `input` to its highest-energy window and write the result,
/// overwriting silently. `output` defaults to `<input_basename>_cropped.png`
/// next to the input. Returns the chosen window.
pub fn crop_image_to_path(
    input: &Path,
    output: Option<&Path>,
    params: &CropParams,
) -> Result<CropWindow> {
    let img = image::open(input)?;
    let (prepared, window) = find_crop_window(img, params)?;
    let cropped = crop_to_window(&prepared, &window);

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    save_cropped(&cropped, &output)?;

    info!("Cropped {:?} at {} -> {:?}", input, window, output);
    Ok(window)
}

/// Report for one packed directory.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Path of the written archive; None when the directory was skipped.
    pub archive: Option<PathBuf>,
    /// Number of images packed.
    pub packed: usize,
    pub unsupported: Vec<PathBuf>,
    pub corrupt: Vec<PathBuf>,
    /// Colliding basename groups that caused the directory to be skipped.
    pub duplicates: Vec<Vec<PathBuf>>,
}

fn cbz_output_path(dir: &Path) -> PathBuf {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());
    dir.with_file_name(format!("{name}.cbz"))
}

/// Remove the original files and the then-empty directory. Only called after
/// the archive write has completed and the writer has been closed.
fn delete_source_directory(dir: &Path, files: &[PathBuf]) -> Result<()> {
    for path in files {
        fs::remove_file(path)?;
    }
    fs::remove_dir(dir)?;
    info!("Deleted source directory: {:?}", dir);
    Ok(())
}

/// Validate, transcode, and pack one directory into `<dir_name>.cbz` placed
/// alongside it.
///
/// Quality errors are raised before any file is touched. Unsupported and
/// corrupt files are excluded and reported in the result, never fatal.
/// Directories with colliding basenames are skipped entirely. Source deletion
/// happens strictly after a successful archive write.
pub fn pack_directory_to_cbz(dir: &Path, params: &CbzParams) -> Result<BatchReport> {
    validate_quality(params.format, params.quality)?;

    let files = list_files(dir)?;
    let duplicates = find_duplicate_stems(&files);
    if !duplicates.is_empty() {
        warn!("Skipping {:?}: duplicate basenames present", dir);
        return Ok(BatchReport {
            archive: None,
            packed: 0,
            unsupported: Vec::new(),
            corrupt: Vec::new(),
            duplicates,
        });
    }

    let scan = scan_directory(dir)?;
    let mut unsupported = Vec::new();
    let mut corrupt = Vec::new();
    for skipped in &scan.skipped {
        match skipped.reason {
            SkipReason::UnsupportedFormat => unsupported.push(skipped.path.clone()),
            SkipReason::CorruptImage => corrupt.push(skipped.path.clone()),
        }
    }

    let count = scan.valid.len();
    let mut entries = Vec::with_capacity(count);
    for (index, img) in scan.valid.iter().enumerate() {
        let page = transcode_image(&img.image, &img.bytes, img.format, params)?;
        let name = if params.rename {
            sequence_name(index, count, page.extension)
        } else {
            let stem = img
                .path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("{index}"));
            format!("{stem}.{}", page.extension)
        };
        entries.push(ArchiveEntry {
            name,
            bytes: page.bytes,
        });
    }

    let archive = cbz_output_path(dir);
    write_cbz(&archive, &entries)?;

    if params.delete_sources {
        delete_source_directory(dir, &files)?;
    }

    Ok(BatchReport {
        archive: Some(archive),
        packed: count,
        unsupported,
        corrupt,
        duplicates,
    })
}
