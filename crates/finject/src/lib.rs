//! # finject
//!
//! Validation and code generation for `@FragmentInject` fragments.
//!
//! Given the declarations of a program, finject generates one `<Target>_InjectFactory` per
//! valid `@FragmentInject` target and one `FragmentInject_<Module>` Dagger module binding every
//! factory into the fragment factory map, then checks that the hand-written `@FragmentModule`
//! includes that generated module.
//!
//! ## Example
//!
//! ```ignore
//! use finject::infrastructure::{Compilation, DeclarationGraph, InMemoryEnvironment, MemoryFiler};
//!
//! let (graph, _) = DeclarationGraph::load_all(&["program.yaml"])?;
//! let mut filer = MemoryFiler::new();
//! let outcome = Compilation::default().run(InMemoryEnvironment::from_graph(graph)?, &mut filer)?;
//! assert!(outcome.passed());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - names, declaration model, code IR and ports
//! - `processor` - validation, synthesis and round coordination
//! - `infrastructure` - config, logging, declaration graphs, rendering and the round loop
//! - [`cli`] - the `finject` command line

pub mod cli;

/// Domain layer - names, declarations, code IR and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use finject_domain::*;
}

/// Processor - validation, synthesis and round coordination
///
/// Re-exports from the processor crate for convenience
pub mod processor {
    pub use finject_processor::*;
}

/// Infrastructure layer - config, logging and the compilation driver
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use finject_infrastructure::adapters::*;
    pub use finject_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::{ClassName, Error, Result};
pub use infrastructure::{Compilation, CompilationOutcome};
pub use processor::{FragmentInjectProcessor, InjectViolation, ProcessingReport, Reporter};
