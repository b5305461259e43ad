//! Domain layer for finject
//!
//! Everything the processor and its collaborators share:
//! - [`value_objects`]: class names, type references, annotations
//! - [`declarations`]: the read-only model of the processed program
//! - [`code`]: the structured description of generated types
//! - [`ports`]: the declaration environment and artifact writer interfaces

pub mod code;
pub mod constants;
pub mod declarations;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use code::{
    Expression, FieldSpec, JavaFile, MethodKind, MethodSpec, ParameterSpec, Statement, TypeSpec,
};
pub use declarations::{
    ConstructorDeclaration, DeclarationKind, Modifier, ParameterDeclaration, TypeDeclaration,
};
pub use error::{Error, Result};
pub use ports::{ArtifactWriter, DeclarationEnvironment, MarkedElement};
pub use value_objects::{
    Annotation, AnnotationMember, AnnotationValue, ClassName, PrimitiveType, TypeName,
    TypeVariableName,
};
