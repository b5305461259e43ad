//! Declaration model
//!
//! The read-only view of the processed program: declared types, their constructors and
//! parameters, with modifiers and annotations. Declaration graphs deserialize straight into
//! these types.

use crate::value_objects::{Annotation, ClassName, TypeName, TypeVariableName};
use serde::{Deserialize, Serialize};

/// Declaration modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
}

impl Modifier {
    /// Source keyword
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
        }
    }
}

/// Kind of a type declaration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

/// A constructor or method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: TypeName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl ParameterDeclaration {
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        Self {
            name: name.into(),
            type_name,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A constructor of a declared type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,
}

impl ConstructorDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDeclaration) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn has_annotation(&self, type_name: &ClassName) -> bool {
        self.annotations.iter().any(|a| &a.type_name == type_name)
    }
}

/// A declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: ClassName,
    #[serde(default)]
    pub kind: DeclarationKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeVariableName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<TypeName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<ConstructorDeclaration>,
}

impl TypeDeclaration {
    /// A class with no modifiers, supertypes or members
    pub fn class(name: ClassName) -> Self {
        Self {
            name,
            kind: DeclarationKind::Class,
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            constructors: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_type_parameter(mut self, variable: TypeVariableName) -> Self {
        self.type_parameters.push(variable);
        self
    }

    pub fn with_superclass(mut self, superclass: impl Into<TypeName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<TypeName>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorDeclaration) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn annotation(&self, type_name: &ClassName) -> Option<&Annotation> {
        self.annotations.iter().find(|a| &a.type_name == type_name)
    }

    /// The type this declaration introduces, parameterized by its own type variables
    pub fn as_type(&self) -> TypeName {
        if self.type_parameters.is_empty() {
            TypeName::Class(self.name.clone())
        } else {
            TypeName::parameterized(
                self.name.clone(),
                self.type_parameters
                    .iter()
                    .cloned()
                    .map(TypeName::Variable)
                    .collect(),
            )
        }
    }

    /// Direct supertypes: superclass first, then interfaces
    pub fn supertypes(&self) -> impl Iterator<Item = &TypeName> {
        self.superclass.iter().chain(self.interfaces.iter())
    }
}
