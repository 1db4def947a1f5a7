//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decoder, and archive errors, and provides semantic
//! variants for dimension/quality validation and per-file batch failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JPEG encoder error: {0}")]
    JpegEncode(#[from] jpeg_encoder::EncodingError),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(
        "Crop size {crop_width}x{crop_height} exceeds image size {image_width}x{image_height}"
    )]
    InvalidDimensions {
        crop_width: u32,
        crop_height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("Invalid {format} quality: {value}. Must be in range {min}-{max}")]
    InvalidQuality {
        format: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Unsupported image format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Corrupt image data: {}: {reason}", path.display())]
    CorruptImage { path: PathBuf, reason: String },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
