#![doc = r#"
imgtools — content-aware cropping and CBZ packing.

This crate provides a typed API behind two small command-line tools:
`smartcrop`, which finds and extracts the sub-region of an image with the
highest edge energy, and `makecbz`, which validates a directory of images,
transcodes/rescales them, and packs them into a `.cbz` archive. Both tools
are thin wrappers over the library, which can be embedded in your own Rust
applications.

Quick start: crop a file
------------------------
```rust,no_run
use std::path::Path;
use imgtools::{CropParams, crop_image_to_path};

fn main() -> imgtools::Result<()> {
    let params = CropParams {
        crop_width: 640,
        crop_height: 480,
        fit: true,
    };

    // Writes photo_cropped.png next to the input and returns the window.
    let window = crop_image_to_path(Path::new("/data/photo.jpg"), None, &params)?;
    println!("cropped at ({}, {})", window.x, window.y);
    Ok(())
}
```

Find a window in memory
-----------------------
```rust,no_run
use imgtools::{CropParams, find_crop_window};

fn main() -> imgtools::Result<()> {
    let img = image::open("/data/photo.jpg")?;
    let params = CropParams { crop_width: 320, crop_height: 240, fit: false };
    let (prepared, window) = find_crop_window(img, &params)?;
    let cropped = prepared.crop_imm(window.x, window.y, window.width, window.height);
    // Use `cropped` in your pipeline.
    let _ = cropped;
    Ok(())
}
```

Pack a directory
----------------
```rust,no_run
use std::path::Path;
use imgtools::{CbzParams, TargetFormat, pack_directory_to_cbz};

fn main() -> imgtools::Result<()> {
    let params = CbzParams {
        format: TargetFormat::Jpeg,
        quality: Some(90),
        max_resolution: Some(3200),
        rename: true,
        delete_sources: false,
    };

    let report = pack_directory_to_cbz(Path::new("/data/chapter_01"), &params)?;
    println!(
        "packed={} unsupported={} corrupt={}",
        report.packed,
        report.unsupported.len(),
        report.corrupt.len()
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `imgtools::Result<T>`; match on `imgtools::Error`
to handle specific cases. Dimension and quality errors are fatal to an
invocation; unsupported/corrupt files are reported per-file in `BatchReport`
and never abort a batch.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`CropWindow`, `TargetFormat`, `SourceFormat`).
- [`core`] — gradient map, window search, resize/transcode primitives.
- [`io`] — directory scanning and JPEG/PNG/CBZ writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{CbzParams, CropParams};
pub use error::{Error, Result};
pub use types::{CropWindow, SkipReason, SourceFormat, TargetFormat};

// Readers
pub use io::reader::{DirectoryScan, SkippedFile, ValidImage};

// High-level API re-exports
pub use api::{BatchReport, crop_image_to_path, find_crop_window, pack_directory_to_cbz};
