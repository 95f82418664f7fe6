//! High-level operations.

pub mod generate;

pub use generate::{generate, generate_with_config, GenerateOptions, GenerateResult};
