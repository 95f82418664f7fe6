//! Test utilities for makegen unit tests.
//!
//! Provides an in-memory source tree so dependency discovery can be tested
//! without touching the real filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use makegen::test_support::MockSourceTree;
//!
//! let tree = MockSourceTree::new()
//!     .with_file("main.c", "#include \"util.h\"\n")
//!     .with_file("util.c", "");
//! ```

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::builder::source_tree::{FileAccessError, SourceTree};
use crate::core::SourceUnit;

/// In-memory source tree.
///
/// Files are keyed by their path relative to the tree root. Base names can
/// additionally be forced to report a (non-)existing implementation file
/// to model trees whose directory listing and contents disagree.
#[derive(Debug, Clone, Default)]
pub struct MockSourceTree {
    files: HashMap<PathBuf, String>,
    hidden_units: HashSet<String>,
}

impl MockSourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Builder form of [`add_file`](Self::add_file).
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    /// Make `unit_exists` report false for `name` even if `name.c` is present.
    pub fn with_hidden_unit(mut self, name: impl Into<String>) -> Self {
        self.hidden_units.insert(name.into());
        self
    }
}

impl SourceTree for MockSourceTree {
    fn unit_exists(&self, unit: &SourceUnit) -> bool {
        !self.hidden_units.contains(unit.name())
            && self.files.contains_key(Path::new(&unit.impl_file()))
    }

    fn read_text(&self, path: &Path) -> Result<String, FileAccessError> {
        self.files.get(path).cloned().ok_or_else(|| {
            FileAccessError::new(
                path,
                io::Error::new(io::ErrorKind::NotFound, "file not found"),
            )
        })
    }
}
