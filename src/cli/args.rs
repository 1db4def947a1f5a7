use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "smartcrop",
    version,
    about = "Crop an image to its highest-detail region"
)]
pub struct CropArgs {
    /// Input image
    pub img_path: PathBuf,

    /// Crop size as <width>x<height>, e.g. 640x480
    pub crop_size: String,

    /// Fit-resize the image to the crop size before searching
    #[arg(short = 'f', long, default_value_t = false)]
    pub fit: bool,

    /// Output file (default: <input_basename>_cropped.png next to the input)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[derive(Parser)]
#[command(
    name = "makecbz",
    version,
    about = "Pack image directories into CBZ archives"
)]
pub struct CbzArgs {
    /// Directory/directories containing the images
    #[arg(required = true)]
    pub dir_paths: Vec<PathBuf>,

    /// Maximum horizontal resolution; omit to keep original sizes
    #[arg(short = 'r', long)]
    pub resolution: Option<u32>,

    /// Convert all images to JPEG
    #[arg(short = 'j', long, conflicts_with = "png")]
    pub jpeg: bool,

    /// Convert all images to PNG
    #[arg(short = 'p', long)]
    pub png: bool,

    /// Quality parameter: 0-100 for JPEG, compression level 0-9 for PNG
    #[arg(short = 'q', long)]
    pub quality: Option<i64>,

    /// Don't rename files
    #[arg(short = 'n', long = "no_rename")]
    pub no_rename: bool,

    /// Delete original files and directories after packing
    #[arg(short = 'd', long)]
    pub delete: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
