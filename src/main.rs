//! CLI entry point for the brick mosaic converter

use brickmosaic::io::cli::{Cli, FileProcessor};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> brickmosaic::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
