//! Declaration environment port

use crate::declarations::TypeDeclaration;
use crate::value_objects::{AnnotationValue, ClassName};

/// A declaration carrying a given marker annotation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkedElement {
    /// The type itself is annotated
    Type(ClassName),
    /// The constructor at `index` of `owner` is annotated
    Constructor { owner: ClassName, index: usize },
}

impl MarkedElement {
    /// The type declaring this element
    pub fn owner(&self) -> &ClassName {
        match self {
            Self::Type(name) | Self::Constructor { owner: name, .. } => name,
        }
    }
}

/// Read-only queries over the symbol graph of one processing round
///
/// `find_declarations_marked` only sees the root declarations of the current round; every other
/// query resolves against everything known so far, including types generated in earlier rounds.
pub trait DeclarationEnvironment {
    /// Root declarations of this round annotated with `marker`, in declaration order
    fn find_declarations_marked(&self, marker: &ClassName) -> Vec<MarkedElement>;

    /// Look up a declared type by name
    fn find_type(&self, name: &ClassName) -> Option<&TypeDeclaration>;

    /// Whether `sub` is `sup` or inherits from it through any chain of supertypes
    fn is_subtype_of(&self, sub: &ClassName, sup: &ClassName) -> bool;

    /// Whether the declaration named `declaration` is annotated with `marker`
    fn has_marker(&self, declaration: &ClassName, marker: &ClassName) -> bool;

    /// Member `member` of annotation `annotation` on type `declaration`
    ///
    /// Class literals naming types that don't exist (yet) come back as
    /// [`AnnotationValue::Error`].
    fn read_annotation_value(
        &self,
        declaration: &ClassName,
        annotation: &ClassName,
        member: &str,
    ) -> Option<AnnotationValue>;
}
