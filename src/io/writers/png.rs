use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageEncoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;

/// Map the 0-9 compression level onto the encoder's tiers.
fn compression_type(level: u8) -> CompressionType {
    match level {
        0..=2 => CompressionType::Fast,
        3..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}

/// Encode an image to in-memory PNG bytes at the given compression level.
pub fn encode_png(img: &DynamicImage, level: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, compression_type(level), FilterType::Adaptive);
    encoder.write_image(img.as_bytes(), img.width(), img.height(), img.color().into())?;
    Ok(bytes)
}

pub fn write_png(output: &Path, img: &DynamicImage, level: u8) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(writer, compression_type(level), FilterType::Adaptive);
    encoder.write_image(img.as_bytes(), img.width(), img.height(), img.color().into())?;
    Ok(())
}
