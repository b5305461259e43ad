//! Ports
//!
//! Interfaces to the collaborators around the processor: the declaration environment it
//! queries and the artifact writer it emits through.

mod environment;
mod writer;

pub use environment::{DeclarationEnvironment, MarkedElement};
pub use writer::ArtifactWriter;
