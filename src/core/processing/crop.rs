use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::core::processing::transcode::{DEFAULT_JPEG_QUALITY, DEFAULT_PNG_COMPRESSION, flatten_alpha};
use crate::error::Result;
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::png::write_png;
use crate::types::CropWindow;

/// Extract exactly the window pixels, unmodified.
pub fn crop_to_window(img: &DynamicImage, window: &CropWindow) -> DynamicImage {
    img.crop_imm(window.x, window.y, window.width, window.height)
}

/// Default output path: `<input_basename>_cropped.png` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_cropped.png"))
}

/// Write the cropped image, overwriting silently. The format follows the
/// output extension: `.jpg`/`.jpeg` goes through the JPEG writer, everything
/// else is written as PNG.
pub fn save_cropped(img: &DynamicImage, output: &Path) -> Result<()> {
    let extension = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => {
            let rgb = flatten_alpha(img);
            write_rgb_jpeg(output, rgb.width(), rgb.height(), rgb.as_raw(), DEFAULT_JPEG_QUALITY)
        }
        _ => write_png(output, img, DEFAULT_PNG_COMPRESSION),
    }
}
