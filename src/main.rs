//! CLI entry point for the sprite pack asset build

use clap::Parser;
use woodsheet::io::cli::{BuildProcessor, Cli, init_logging};

fn main() -> woodsheet::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let mut processor = BuildProcessor::new(cli);
    processor.process().map(|_| ())
}
