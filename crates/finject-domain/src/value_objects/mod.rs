//! Value objects
//!
//! Immutable names and references shared by the declaration model, the processor and the
//! renderer.

mod annotation;
mod class_name;
mod type_name;
pub mod well_known;

pub use annotation::{Annotation, AnnotationMember, AnnotationValue};
pub use class_name::ClassName;
pub use type_name::{PrimitiveType, TypeName, TypeVariableName};
