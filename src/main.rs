//! CLI entry point for strict Wang tile synthesis

use clap::Parser;
use strictwang::io::cli::{Cli, FileProcessor};

fn main() -> strictwang::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
