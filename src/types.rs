//! Shared types and enums used across imgtools.
//! Includes `CropWindow`, the batch `TargetFormat` and `SourceFormat`, and
//! `SkipReason` for files excluded during validation.
use serde::{Deserialize, Serialize};

/// Rectangular sub-region of an image, offsets in pixels from the top-left
/// corner. Always fits entirely within the image it was computed for.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for CropWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Output format for transcoded batch entries.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum TargetFormat {
    Jpeg,
    Png,
    /// Keep each image's source format.
    Keep,
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetFormat::Jpeg => write!(f, "JPEG"),
            TargetFormat::Png => write!(f, "PNG"),
            TargetFormat::Keep => write!(f, "Keep"),
        }
    }
}

/// Source formats accepted by the batch validator.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum SourceFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl SourceFormat {
    /// Map a detected container format to a supported source format.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(SourceFormat::Jpeg),
            image::ImageFormat::Png => Some(SourceFormat::Png),
            image::ImageFormat::Gif => Some(SourceFormat::Gif),
            image::ImageFormat::WebP => Some(SourceFormat::Webp),
            _ => None,
        }
    }

    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            SourceFormat::Jpeg => image::ImageFormat::Jpeg,
            SourceFormat::Png => image::ImageFormat::Png,
            SourceFormat::Gif => image::ImageFormat::Gif,
            SourceFormat::Webp => image::ImageFormat::WebP,
        }
    }

    /// File extension used for archive entries of this format.
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "jpg",
            SourceFormat::Png => "png",
            SourceFormat::Gif => "gif",
            SourceFormat::Webp => "webp",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Jpeg => write!(f, "JPEG"),
            SourceFormat::Png => write!(f, "PNG"),
            SourceFormat::Gif => write!(f, "GIF"),
            SourceFormat::Webp => write!(f, "WEBP"),
        }
    }
}

/// Why a file was excluded from a batch. Per-file failures are reported and
/// recovered, never fatal to the batch.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SkipReason {
    UnsupportedFormat,
    CorruptImage,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnsupportedFormat => write!(f, "Unsupported image format"),
            SkipReason::CorruptImage => write!(f, "Error in reading as image"),
        }
    }
}
