//! CLI entry point for the outfit generator

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wardrobe_shuffle::io::cli::{Cli, OutfitRunner};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> wardrobe_shuffle::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let runner = OutfitRunner::new(cli);
    runner.run()
}
