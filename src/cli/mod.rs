//! Command Line Interface (CLI) layer for the imgtools binaries.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `smartcrop` and `makecbz`
//! tools. It wires user-provided options to the underlying library
//! functionality exposed via `imgtools::api`.
//!
//! If you are embedding imgtools into another application, prefer using
//! the high-level `imgtools::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{CbzArgs, CropArgs};
pub use runner::{run_cbz, run_crop};
