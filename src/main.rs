//! `greet-universe` - Greet the Universe.
//!
//! Entry point for the application.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use greet_universe::cli::Args;
use greet_universe::greeter::greet;
use greet_universe::logging;

fn main() -> Result<()> {
    // Exits on its own for --help, --version and invalid arguments
    let args = Args::parse();
    let config = args.resolve();

    logging::init(config.verbose);
    tracing::debug!(raw = %args.the_universe, resolved = %config.the_universe, "resolved greeting target");

    let mut stdout = io::stdout().lock();
    greet(&mut stdout, &config.the_universe).context("could not greet the universe")?;

    Ok(())
}
