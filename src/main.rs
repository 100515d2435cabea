mod cli;
mod execute;

use clap::Parser;
use crate::cli::CLI;
use anyhow::Result;

fn main() -> Result<()> {
    let cli = CLI::parse();
    init_logging(cli.verbose);
    execute::execute(cli)
}

fn init_logging(verbose: bool) {
    let mut env = env_logger::Builder::new();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env.filter_module("gobrew", level);
    if let Ok(content) = std::env::var("RUST_LOG") {
        env.parse_filters(&content);
    }
    env.format_timestamp(None).init();
}
