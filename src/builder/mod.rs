//! Dependency discovery and makefile rendering.
//!
//! - `source_tree`: filesystem access behind a trait
//! - `includes`: per-file `#include` scanning
//! - `tracker`: transitive closure over implementation units
//! - `makefile`: rendering a closure into a makefile

pub mod includes;
pub mod makefile;
pub mod source_tree;
pub mod tracker;

pub use includes::{extract, Extraction};
pub use makefile::{render_header, MakefileTemplate, MAKEFILE_NAME};
pub use source_tree::{FileAccessError, SourceTree, WorkingDir};
pub use tracker::track_closure;
