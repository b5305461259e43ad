//! Configuration
//!
//! Layered configuration: defaults, then `finject.toml`, then `FINJECT_*` environment
//! variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
