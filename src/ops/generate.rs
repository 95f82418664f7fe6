//! Implementation of makefile generation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::builder::{track_closure, WorkingDir, MAKEFILE_NAME};
use crate::core::{DependencyClosure, SourceUnit};
use crate::util::fs::write_atomic;
use crate::util::Config;

/// Options for generating a makefile.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Entry implementation file, relative to `root`
    pub entry: PathBuf,

    /// Directory holding the sources; the makefile is written here
    pub root: PathBuf,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path of the written makefile
    pub makefile: PathBuf,

    /// Discovered dependencies
    pub closure: DependencyClosure,
}

/// Discover the dependencies of the entry file and write `makefile`.
///
/// Nothing is written unless discovery succeeds for every unit.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateResult> {
    let config = Config::load_from_dir(&opts.root)?;
    generate_with_config(opts, &config)
}

/// Like [`generate`], with configuration already loaded.
pub fn generate_with_config(opts: &GenerateOptions, config: &Config) -> Result<GenerateResult> {
    let tree = WorkingDir::new(&opts.root);
    let table = config.library_table();
    let entry = SourceUnit::from_entry(&opts.entry);

    let closure = track_closure(&entry, &tree, &table).with_context(|| {
        format!(
            "failed to discover dependencies of `{}`",
            opts.entry.display()
        )
    })?;

    tracing::debug!(
        "found {} unit(s), {} header(s), {} library flag(s)",
        closure.units().len(),
        closure.headers().len(),
        closure.libraries().len()
    );

    let contents = config.makefile_template().render(&closure);
    let makefile = opts.root.join(MAKEFILE_NAME);
    write_atomic(&makefile, &contents)?;

    tracing::info!(
        "wrote {} ({})",
        display_relative(&makefile, &opts.root),
        closure.impl_files().join(" ")
    );

    Ok(GenerateResult { makefile, closure })
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
