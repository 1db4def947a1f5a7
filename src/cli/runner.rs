use std::path::Path;

use tracing::info;

use crate::api::{crop_image_to_path, pack_directory_to_cbz};
use crate::core::params::{CbzParams, CropParams};
use crate::types::TargetFormat;

use super::args::{CbzArgs, CropArgs};
use super::errors::AppError;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the `<width>x<height>` crop size argument.
fn parse_crop_size(spec: &str) -> Result<(u32, u32), AppError> {
    let invalid = || AppError::InvalidCropSize {
        value: spec.to_string(),
    };

    let (w, h) = spec.split_once('x').ok_or_else(invalid)?;
    let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

pub fn run_crop(args: CropArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let (crop_width, crop_height) = parse_crop_size(&args.crop_size)?;
    let params = CropParams {
        crop_width,
        crop_height,
        fit: args.fit,
    };

    let window = crop_image_to_path(&args.img_path, args.output.as_deref(), &params)?;
    println!(
        "Cropped {} at offset ({}, {})",
        args.img_path.display(),
        window.x,
        window.y
    );
    Ok(())
}

pub fn run_cbz(args: CbzArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let format = if args.jpeg {
        TargetFormat::Jpeg
    } else if args.png {
        TargetFormat::Png
    } else {
        TargetFormat::Keep
    };

    let params = CbzParams {
        format,
        quality: args.quality,
        max_resolution: args.resolution,
        rename: !args.no_rename,
        delete_sources: args.delete,
    };

    for dir in &args.dir_paths {
        println!("Processing {} ...", dir.display());
        let report = pack_directory_to_cbz(dir, &params)?;

        if !report.duplicates.is_empty() {
            println!("Duplicate files present, not creating cbz.");
            for group in &report.duplicates {
                let names: Vec<String> = group.iter().map(|p| base_name(p)).collect();
                println!("\t{}", names.join(", "));
            }
            continue;
        }

        if !report.unsupported.is_empty() || !report.corrupt.is_empty() {
            println!(
                "Found {} bad files.",
                report.unsupported.len() + report.corrupt.len()
            );
            for path in &report.unsupported {
                println!("\t{}: Unsupported image format.", base_name(path));
            }
            for path in &report.corrupt {
                println!("\t{}: Error in reading as image.", base_name(path));
            }
        }

        if let Some(archive) = &report.archive {
            info!("Finished {:?}", dir);
            println!("Wrote {} ({} pages)", archive.display(), report.packed);
        }
    }

    Ok(())
}
