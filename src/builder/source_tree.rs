//! Access to the project's source files.
//!
//! Dependency discovery only needs two things from the filesystem: whether
//! an implementation file exists for a base name, and the text of a file.
//! The `SourceTree` trait captures that so discovery can run against an
//! in-memory tree in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::SourceUnit;

/// A source file could not be read.
#[derive(Debug, Error)]
#[error("failed to read source file `{}`", path.display())]
pub struct FileAccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FileAccessError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FileAccessError {
            path: path.into(),
            source,
        }
    }
}

/// Read-only view of the files a project is built from.
pub trait SourceTree {
    /// Whether the implementation file for `unit` exists.
    fn unit_exists(&self, unit: &SourceUnit) -> bool;

    /// Read a file relative to the tree root.
    fn read_text(&self, path: &Path) -> Result<String, FileAccessError>;
}

/// A source tree rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct WorkingDir {
    root: PathBuf,
}

impl WorkingDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        WorkingDir { root: root.into() }
    }
}

impl SourceTree for WorkingDir {
    fn unit_exists(&self, unit: &SourceUnit) -> bool {
        self.root.join(unit.impl_file()).is_file()
    }

    fn read_text(&self, path: &Path) -> Result<String, FileAccessError> {
        fs::read_to_string(self.root.join(path)).map_err(|e| FileAccessError::new(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_working_dir_probes_impl_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("util.c"), "int util(void);").unwrap();
        fs::write(tmp.path().join("only.h"), "").unwrap();

        let tree = WorkingDir::new(tmp.path());
        assert!(tree.unit_exists(&SourceUnit::new("util")));
        assert!(!tree.unit_exists(&SourceUnit::new("only")));
    }

    #[test]
    fn test_working_dir_read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let tree = WorkingDir::new(tmp.path());

        let err = tree.read_text(Path::new("missing.c")).unwrap_err();
        assert_eq!(err.path, PathBuf::from("missing.c"));
        assert!(err.to_string().contains("missing.c"));
    }
}
