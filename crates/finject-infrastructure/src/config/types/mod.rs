//! Configuration types module

pub mod app;
pub mod logging;
pub mod output;
pub mod processor;

// Re-export main types
pub use app::*;
pub use logging::*;
pub use output::*;
pub use processor::*;
