//! CLI entry point for quadrant colour extraction

use clap::Parser;
use quadcolor::io::cli::{Cli, FileProcessor};
use quadcolor::io::logging::init_logging;

fn main() -> quadcolor::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut processor = FileProcessor::new(cli);
    processor
        .process()
        .inspect_err(|error| log::error!("{error}"))?;

    Ok(())
}
