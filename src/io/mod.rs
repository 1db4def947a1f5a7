//! I/O layer for decoding batch directories and writing outputs.
//! Provides the `reader` for validation/classification and `writers`
//! for JPEG/PNG encoding and the CBZ archive container.
pub mod reader;
pub use reader::{DirectoryScan, SkippedFile, ValidImage};

pub mod writers;
