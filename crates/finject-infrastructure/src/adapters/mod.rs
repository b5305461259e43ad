//! Adapters implementing the domain ports
//!
//! - [`graph`]: declaration graph files
//! - [`memory_environment`]: the declaration environment over a loaded graph
//! - [`java_renderer`]: Java source rendering
//! - [`filer`]: artifact writers

pub mod filer;
pub mod graph;
pub mod java_renderer;
pub mod memory_environment;

pub use filer::{source_path, FilesystemFiler, GeneratedSource, MemoryFiler};
pub use graph::{collect_graph_files, DeclarationGraph};
pub use java_renderer::render_java;
pub use memory_environment::InMemoryEnvironment;
