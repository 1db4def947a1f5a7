use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;

/// Encode interleaved RGB data to in-memory JPEG bytes.
/// The encoder accepts qualities 1-100, so 0 is clamped up.
pub fn encode_rgb_jpeg(cols: u32, rows: u32, data: &[u8], quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = Encoder::new(&mut bytes, quality.max(1));
    encoder.encode(data, cols as u16, rows as u16, ColorType::Rgb)?;
    Ok(bytes)
}

pub fn write_rgb_jpeg(
    output: &Path,
    cols: u32,
    rows: u32,
    data: &[u8],
    quality: u8,
) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality.max(1));
    encoder.encode(data, cols as u16, rows as u16, ColorType::Rgb)?;
    Ok(())
}
