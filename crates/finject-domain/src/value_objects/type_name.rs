//! Type references
//!
//! [`TypeName`] covers the shapes that appear in constructor signatures and generated code:
//! primitives, classes, parameterized classes, type variables, arrays, and any of those
//! carrying type annotations (qualifiers end up there).

use super::{Annotation, ClassName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Java primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    /// Source keyword
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// A named type variable with optional upper bounds
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeVariableName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bounds: Vec<TypeName>,
}

impl TypeVariableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn with_bound(mut self, bound: TypeName) -> Self {
        self.bounds.push(bound);
        self
    }
}

/// A reference to a type
///
/// Declaration graphs spell these externally tagged, e.g.
/// `{"parameterized": {"raw": "javax.inject.Provider", "arguments": [{"class": "java.lang.Long"}]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeName {
    Primitive(PrimitiveType),
    Class(ClassName),
    Parameterized {
        raw: ClassName,
        arguments: Vec<TypeName>,
    },
    Variable(TypeVariableName),
    Array(Box<TypeName>),
    Annotated {
        annotations: Vec<Annotation>,
        inner: Box<TypeName>,
    },
}

impl TypeName {
    /// `raw<arguments...>`
    pub fn parameterized(raw: ClassName, arguments: Vec<TypeName>) -> Self {
        Self::Parameterized { raw, arguments }
    }

    /// A type variable without bounds
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(TypeVariableName::new(name))
    }

    /// The class behind a class or parameterized type, looking through annotations
    pub fn raw_class_name(&self) -> Option<&ClassName> {
        match self {
            Self::Class(name) | Self::Parameterized { raw: name, .. } => Some(name),
            Self::Annotated { inner, .. } => inner.raw_class_name(),
            Self::Primitive(_) | Self::Variable(_) | Self::Array(_) => None,
        }
    }

    /// True for `raw<...>` with exactly this raw class
    pub fn is_parameterized_by(&self, class: &ClassName) -> bool {
        match self {
            Self::Parameterized { raw, .. } => raw == class,
            Self::Annotated { inner, .. } => inner.is_parameterized_by(class),
            _ => false,
        }
    }

    /// The reference type standing in for a primitive in generic positions
    pub fn boxed(&self) -> TypeName {
        let Self::Primitive(primitive) = self else {
            return self.clone();
        };
        let simple = match primitive {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Char => "Character",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
        };
        Self::Class(ClassName::new("java.lang", simple))
    }

    /// Type arguments that are type variables, in order
    pub fn type_variables(&self) -> Vec<TypeVariableName> {
        match self {
            Self::Parameterized { arguments, .. } => arguments
                .iter()
                .filter_map(|argument| match argument {
                    Self::Variable(variable) => Some(variable.clone()),
                    _ => None,
                })
                .collect(),
            Self::Annotated { inner, .. } => inner.type_variables(),
            _ => Vec::new(),
        }
    }

    /// This type carrying additional type annotations
    pub fn annotated(self, annotations: Vec<Annotation>) -> Self {
        if annotations.is_empty() {
            return self;
        }
        match self {
            Self::Annotated {
                annotations: mut existing,
                inner,
            } => {
                existing.extend(annotations);
                Self::Annotated {
                    annotations: existing,
                    inner,
                }
            }
            other => Self::Annotated {
                annotations,
                inner: Box::new(other),
            },
        }
    }

    /// This type with its top-level type annotations removed
    pub fn without_annotations(&self) -> Self {
        match self {
            Self::Annotated { inner, .. } => inner.without_annotations(),
            other => other.clone(),
        }
    }

    /// Top-level type annotations
    pub fn annotations(&self) -> &[Annotation] {
        match self {
            Self::Annotated { annotations, .. } => annotations,
            _ => &[],
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(value: ClassName) -> Self {
        Self::Class(value)
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}

/// Fully-qualified source form, stable across runs
impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => f.write_str(primitive.keyword()),
            Self::Class(name) => write!(f, "{name}"),
            Self::Parameterized { raw, arguments } => {
                write!(f, "{raw}<")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(">")
            }
            Self::Variable(variable) => f.write_str(&variable.name),
            Self::Array(component) => write!(f, "{component}[]"),
            Self::Annotated { annotations, inner } => {
                for annotation in annotations {
                    write!(f, "{annotation} ")?;
                }
                write!(f, "{inner}")
            }
        }
    }
}
