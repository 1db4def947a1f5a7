use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid crop size: {value}. Must be <width>x<height> with positive integers")]
    InvalidCropSize { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
