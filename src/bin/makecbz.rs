//! makecbz CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the batch
//! packing pipeline for each directory, and exit with appropriate status.
//! For programmatic use, prefer the library API (`imgtools::api`).

use clap::Parser;

use imgtools::cli::{self, CbzArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CbzArgs::parse();
    cli::run_cbz(args)
}
