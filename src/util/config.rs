//! Project configuration.
//!
//! An optional `makegen.toml` next to the sources can extend the library
//! table and override the toolchain values written into the makefile:
//!
//! ```toml
//! verbose = true
//!
//! [toolchain]
//! cc = "clang"
//! cflags = "-O2 -I."
//! target = "app"
//!
//! [libraries]
//! pthread = "-lpthread"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::builder::MakefileTemplate;
use crate::core::LibraryTable;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "makegen.toml";

/// makegen configuration.
///
/// Unknown keys are rejected: a misspelled `[libraries]` section would
/// otherwise drop link flags without notice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Enable debug logging
    pub verbose: bool,

    /// Toolchain settings
    pub toolchain: ToolchainSettings,

    /// Extra system header to link flag mappings (e.g. `pthread = "-lpthread"`)
    pub libraries: BTreeMap<String, String>,
}

/// Toolchain values for the generated makefile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainSettings {
    /// C compiler (default: gcc)
    pub cc: Option<String>,

    /// Compiler flags (default: -g -I.)
    pub cflags: Option<String>,

    /// Output binary name (default: a.out)
    pub target: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load `makegen.toml` from `dir`, or defaults if it doesn't exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The built-in library table extended with configured entries.
    pub fn library_table(&self) -> LibraryTable {
        LibraryTable::builtin().with_overrides(self.libraries.clone())
    }

    /// The makefile template with configured toolchain values applied.
    pub fn makefile_template(&self) -> MakefileTemplate {
        let mut template = MakefileTemplate::default();
        if let Some(cc) = &self.toolchain.cc {
            template.cc = cc.clone();
        }
        if let Some(cflags) = &self.toolchain.cflags {
            template.cflags = cflags.clone();
        }
        if let Some(target) = &self.toolchain.target {
            template.target = target.clone();
        }
        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from_dir(tmp.path()).unwrap();

        assert!(!config.verbose);
        assert_eq!(config.library_table(), LibraryTable::builtin());
        assert_eq!(config.makefile_template(), MakefileTemplate::default());
    }

    #[test]
    fn test_parse_full_config() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
verbose = true

[toolchain]
cc = "clang"
target = "app"

[libraries]
pthread = "-lpthread"
"#,
        )
        .unwrap();

        let config = Config::load_from_dir(tmp.path()).unwrap();
        assert!(config.verbose);

        let table = config.library_table();
        assert_eq!(table.flag_for("pthread"), Some("-lpthread"));
        assert_eq!(table.flag_for("math"), Some("-lm"));

        let template = config.makefile_template();
        assert_eq!(template.cc, "clang");
        assert_eq!(template.cflags, "-g -I.");
        assert_eq!(template.target, "app");
    }

    #[test]
    fn test_misspelled_libraries_section_fails() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[librarys]\npthread = \"-lpthread\"\n",
        )
        .unwrap();

        let err = Config::load_from_dir(tmp.path()).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("failed to parse config"));
        assert!(msg.contains("librarys"));
    }

    #[test]
    fn test_unknown_toolchain_key_fails() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[toolchain]\ncompiler = \"clang\"\n",
        )
        .unwrap();

        assert!(Config::load_from_dir(tmp.path()).is_err());
    }

    #[test]
    fn test_malformed_config_fails() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), "[libraries\n").unwrap();

        let err = Config::load_from_dir(tmp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config"));
    }
}
