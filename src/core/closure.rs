//! The result of dependency discovery.

use std::collections::BTreeSet;

use crate::core::unit::SourceUnit;

/// Everything reachable from an entry unit: the units to compile, the
/// headers that trigger recompilation and the flags to link with.
///
/// All three sets are ordered so the generated makefile is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyClosure {
    units: BTreeSet<SourceUnit>,
    headers: BTreeSet<String>,
    libraries: BTreeSet<String>,
}

impl DependencyClosure {
    /// Build a closure, dropping any header that belongs to one of `units`.
    ///
    /// Headers are classified per scanned file, so this final pass is what
    /// guarantees no base name is both a unit and a header.
    pub fn new(
        units: BTreeSet<SourceUnit>,
        mut headers: BTreeSet<String>,
        libraries: BTreeSet<String>,
    ) -> Self {
        for unit in &units {
            headers.remove(&unit.header_file());
        }

        DependencyClosure {
            units,
            headers,
            libraries,
        }
    }

    pub fn units(&self) -> &BTreeSet<SourceUnit> {
        &self.units
    }

    /// Header file names (`foo.h`).
    pub fn headers(&self) -> &BTreeSet<String> {
        &self.headers
    }

    /// Linker flags (`-lm`).
    pub fn libraries(&self) -> &BTreeSet<String> {
        &self.libraries
    }

    /// Implementation file names, in unit order.
    pub fn impl_files(&self) -> Vec<String> {
        self.units.iter().map(SourceUnit::impl_file).collect()
    }

    /// Check whether a unit with the given base name was discovered.
    pub fn contains_unit(&self, name: &str) -> bool {
        self.units.iter().any(|u| u.name() == name)
    }
}
