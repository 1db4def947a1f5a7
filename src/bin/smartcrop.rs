//! smartcrop CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the crop
//! pipeline, and exit with appropriate status. For programmatic use, prefer
//! the library API (`imgtools::api`).

use clap::Parser;

use imgtools::cli::{self, CropArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CropArgs::parse();
    cli::run_crop(args)
}
