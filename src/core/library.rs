//! Mapping from system headers to linker flags.

use std::collections::BTreeMap;

/// Built-in header to link flag mappings.
const BUILTIN_LIBRARIES: &[(&str, &str)] = &[("math", "-lm")];

/// Lookup from a system header base name (`math` for `<math.h>`) to the
/// linker flag the build needs when that header is included.
///
/// Headers not in the table need no link flag and are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryTable {
    entries: BTreeMap<String, String>,
}

impl Default for LibraryTable {
    fn default() -> Self {
        LibraryTable::builtin()
    }
}

impl LibraryTable {
    /// An empty table.
    pub fn empty() -> Self {
        LibraryTable {
            entries: BTreeMap::new(),
        }
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        BUILTIN_LIBRARIES.iter().copied().collect()
    }

    /// Add entries from `other`, overriding existing ones.
    pub fn with_overrides<I, K, V>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (header, flag) in other {
            self.entries.insert(header.into(), flag.into());
        }
        self
    }

    /// Link flag for a system header base name, if one is required.
    pub fn flag_for(&self, header: &str) -> Option<&str> {
        self.entries.get(header).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LibraryTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LibraryTable::empty().with_overrides(iter)
    }
}
