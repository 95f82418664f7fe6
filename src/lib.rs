//! makegen - generate a makefile for a small C project
//!
//! Starting from one entry `.c` file, makegen follows `#include`
//! directives to find every implementation file, header and link library
//! the program needs, and writes a `makefile` that builds it.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for makegen unit tests.
#[cfg(test)]
pub mod test_support;

pub use builder::{track_closure, FileAccessError, MakefileTemplate, SourceTree, WorkingDir};
pub use core::{DependencyClosure, LibraryTable, SourceUnit};
pub use util::Config;
