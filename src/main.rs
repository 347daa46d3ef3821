use std::path::PathBuf;
use clap::Parser;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::utils::constants::{DEFAULT_IGNORE_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_ROOT};
use crate::utils::enums::MatchMode;

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "collector", about = "📦 Collector: gather a directory tree's text files into one labeled document", long_about = None)]
struct Cli {
    /// Directory to walk
    #[arg(default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Ignore file, resolved against the root
    #[arg(short, long, default_value = DEFAULT_IGNORE_FILE)]
    ignore_file: String,

    /// Output file, resolved against the root
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: String,

    /// Pattern matching: literal or glob
    #[arg(short, long = "match", default_value_t = MatchMode::Literal)]
    mode: MatchMode,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    commands::collect::run(&cli.root, &cli.ignore_file, &cli.output, cli.mode)
}
