//! Transitive dependency discovery.
//!
//! Starting from an entry unit, every reachable implementation unit is
//! scanned exactly once. Units are kept on an explicit stack rather than
//! discovered recursively, and a visited set guarantees termination on
//! cyclic include graphs.

use std::collections::BTreeSet;
use std::path::Path;

use crate::builder::includes::extract;
use crate::builder::source_tree::{FileAccessError, SourceTree};
use crate::core::{DependencyClosure, LibraryTable, SourceUnit};

/// Compute the dependency closure of `entry`.
///
/// Fails on the first implementation file that cannot be read; no partial
/// closure is returned.
pub fn track_closure(
    entry: &SourceUnit,
    tree: &dyn SourceTree,
    table: &LibraryTable,
) -> Result<DependencyClosure, FileAccessError> {
    let mut pending = vec![entry.clone()];
    let mut visited = BTreeSet::new();
    let mut headers = BTreeSet::new();
    let mut libraries = BTreeSet::new();

    while let Some(unit) = pending.pop() {
        if visited.contains(&unit) {
            continue;
        }

        let text = tree.read_text(Path::new(&unit.impl_file()))?;
        let mut found = extract(&text, tree, table);

        // x.c including x.h must not requeue x
        found.siblings.remove(&unit);

        tracing::debug!(
            "scanned {}: {} sibling(s), {} header(s), {} library flag(s)",
            unit.impl_file(),
            found.siblings.len(),
            found.headers.len(),
            found.libraries.len()
        );

        pending.extend(
            found
                .siblings
                .into_iter()
                .filter(|sibling| !visited.contains(sibling)),
        );
        headers.extend(found.headers);
        libraries.extend(found.libraries);

        visited.insert(unit);
    }

    Ok(DependencyClosure::new(visited, headers, libraries))
}
