//! # Infrastructure Layer
//!
//! Everything around the processor that touches the outside world.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration with environment overrides |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Compilation
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Declaration graphs, in-memory environment, Java rendering, filers |
//! | [`compilation`] | Round loop driving the processor |

pub mod adapters;
pub mod compilation;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use adapters::{
    render_java, DeclarationGraph, FilesystemFiler, GeneratedSource, InMemoryEnvironment,
    MemoryFiler,
};
pub use compilation::{Compilation, CompilationOutcome};
pub use error_ext::ErrorContext;
