//! Source unit identification.
//!
//! A SourceUnit is a C implementation file named by its base name
//! (`util` for `util.c`). The header and implementation paths are derived
//! from that name, never stored.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Suffix of an implementation file.
pub const IMPL_SUFFIX: &str = ".c";

/// Suffix of a header file.
pub const HEADER_SUFFIX: &str = ".h";

/// An implementation unit, keyed by base name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceUnit {
    name: String,
}

impl SourceUnit {
    /// Create a unit from its base name.
    ///
    /// The name is normalized so every spelling of a path names the same
    /// unit: `.` components are dropped and repeated separators collapse.
    pub fn new(name: impl Into<String>) -> Self {
        SourceUnit {
            name: normalize(&name.into()),
        }
    }

    /// Create a unit from an entry file path such as `main.c` or `./main.c`.
    ///
    /// A path without the `.c` suffix is taken as the base name itself.
    pub fn from_entry(path: &Path) -> Self {
        let raw = path.to_string_lossy();
        let name = raw.strip_suffix(IMPL_SUFFIX).unwrap_or(&raw);
        SourceUnit::new(name)
    }

    /// Base name without extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Implementation file name (`name.c`).
    pub fn impl_file(&self) -> String {
        format!("{}{}", self.name, IMPL_SUFFIX)
    }

    /// Header file name (`name.h`).
    pub fn header_file(&self) -> String {
        format!("{}{}", self.name, HEADER_SUFFIX)
    }
}

fn normalize(name: &str) -> String {
    let path: PathBuf = Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    path.to_string_lossy().into_owned()
}

impl fmt::Display for SourceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for SourceUnit {
    fn from(name: &str) -> Self {
        SourceUnit::new(name)
    }
}
