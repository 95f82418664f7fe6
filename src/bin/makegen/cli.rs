//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Usage line printed when no entry file is given.
pub const USAGE: &str = "usage: makegen <entry_file.c>";

/// makegen - generate a makefile by following #include directives
#[derive(Parser)]
#[command(name = "makegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Entry implementation file (e.g. main.c)
    pub entry: Option<PathBuf>,

    /// Ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,
}
