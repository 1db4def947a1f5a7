use serde::{Deserialize, Serialize};

use crate::types::TargetFormat;

/// Crop pipeline parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropParams {
    /// Crop window width in pixels
    pub crop_width: u32,
    /// Crop window height in pixels
    pub crop_height: u32,
    /// If true, fit-resize the image to the crop size before the search
    pub fit: bool,
}

/// CBZ pipeline parameters, one instance per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CbzParams {
    pub format: TargetFormat,
    /// Encoder quality; None selects the per-format default (JPEG 95, PNG 6)
    pub quality: Option<i64>,
    /// Maximum horizontal resolution in pixels; None means no scaling
    pub max_resolution: Option<u32>,
    /// Rename entries to zero-padded sequential names
    pub rename: bool,
    /// Delete source files and directory after a successful archive write
    pub delete_sources: bool,
}

impl Default for CbzParams {
    fn default() -> Self {
        Self {
            format: TargetFormat::Keep,
            quality: None,
            max_resolution: None,
            rename: true,
            delete_sources: false,
        }
    }
}
