//! Core data structures for makegen.
//!
//! - `SourceUnit`: an implementation file keyed by base name
//! - `LibraryTable`: system header to link flag mapping
//! - `DependencyClosure`: the result of dependency discovery

pub mod closure;
pub mod library;
pub mod unit;

pub use closure::DependencyClosure;
pub use library::LibraryTable;
pub use unit::SourceUnit;
