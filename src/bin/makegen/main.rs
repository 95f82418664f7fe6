//! makegen CLI

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, USAGE};
use makegen::ops::{generate_with_config, GenerateOptions};
use makegen::Config;

fn main() {
    let cli = Cli::parse();

    let Some(entry) = cli.entry else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    if let Err(e) = run(entry, &cli.extra) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(entry: std::path::PathBuf, extra: &[String]) -> Result<()> {
    let root = std::env::current_dir().context("failed to get current directory")?;
    let config = Config::load_from_dir(&root)?;

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("makegen=debug")
    } else {
        EnvFilter::new("makegen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if !extra.is_empty() {
        tracing::warn!("ignoring extra arguments: {}", extra.join(" "));
    }

    let opts = GenerateOptions { entry, root };
    generate_with_config(&opts, &config)?;

    Ok(())
}
