//! `#include` directive scanning.
//!
//! This is a textual heuristic, not a preprocessor: directives are found by
//! pattern matching, so includes inside comments or disabled `#if` blocks
//! are still picked up, and macro-expanded includes are missed.
//!
//! Two forms are recognized:
//! - `#include "name.h"` - a project header. If `name.c` exists it is a
//!   sibling unit to compile, otherwise a plain header.
//! - `#include <name.h>` - a system header, which may imply a link flag.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::builder::source_tree::SourceTree;
use crate::core::{LibraryTable, SourceUnit};

static QUOTE_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"#include\s+"([^"\n]+)\.h""#).expect("valid regex"));

static ANGLE_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#include\s*<([^>\n]+)\.h>").expect("valid regex"));

/// Includes found in a single source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Quote-included headers without an implementation file (`foo.h`).
    pub headers: BTreeSet<String>,
    /// Quote-included names that have an implementation file.
    pub siblings: BTreeSet<SourceUnit>,
    /// Link flags for recognized system headers.
    pub libraries: BTreeSet<String>,
}

/// Scan `text` for include directives.
///
/// `tree` is probed for sibling implementation files; `table` maps system
/// headers to link flags. Unmatched or unknown directives are ignored.
pub fn extract(text: &str, tree: &dyn SourceTree, table: &LibraryTable) -> Extraction {
    let mut extraction = Extraction::default();

    let quoted: BTreeSet<&str> = QUOTE_INCLUDE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect();

    for name in quoted {
        let unit = SourceUnit::new(name);
        if tree.unit_exists(&unit) {
            extraction.siblings.insert(unit);
        } else {
            extraction.headers.insert(unit.header_file());
        }
    }

    for cap in ANGLE_INCLUDE.captures_iter(text) {
        let Some(name) = cap.get(1) else { continue };
        match table.flag_for(name.as_str()) {
            Some(flag) => {
                extraction.libraries.insert(flag.to_string());
            }
            None => tracing::trace!("no link flag for <{}.h>", name.as_str()),
        }
    }

    extraction
}
