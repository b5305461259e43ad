//! Annotations and annotation values
//!
//! The same representation is used for annotations read from declarations and for annotations
//! stamped on generated code.

use super::{ClassName, TypeName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A constant appearing as an annotation member value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationValue {
    /// A class literal, `Foo.class`
    Class(TypeName),
    /// A class literal whose type could not be resolved yet
    ///
    /// Holds the name as written. Declarations referring to types generated later in the same
    /// compilation read back this way until those types exist.
    Error(String),
    String(String),
    Bool(bool),
    Int(i64),
    /// An enum constant, `Type.NAME`
    Enum { type_name: ClassName, constant: String },
    Array(Vec<AnnotationValue>),
}

impl AnnotationValue {
    /// Shorthand for a class literal of `name`
    pub fn class(name: ClassName) -> Self {
        Self::Class(TypeName::Class(name))
    }

    /// Elements of an array value, or the single value itself
    ///
    /// A single-element array member may be written without braces, so both read the same.
    pub fn elements(&self) -> Vec<&AnnotationValue> {
        match self {
            Self::Array(values) => values.iter().collect(),
            single => vec![single],
        }
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(type_name) => write!(f, "{type_name}.class"),
            Self::Error(name) => write!(f, "<error {name}>"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Enum {
                type_name,
                constant,
            } => write!(f, "{type_name}.{constant}"),
            Self::Array(values) => {
                f.write_str("{")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// One `name = value` pair of an annotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnotationMember {
    pub name: String,
    pub value: AnnotationValue,
}

/// An annotation: its type plus members in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub type_name: ClassName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<AnnotationMember>,
}

impl Annotation {
    /// A marker annotation with no members
    pub fn marker(type_name: ClassName) -> Self {
        Self {
            type_name,
            members: Vec::new(),
        }
    }

    /// Append a member
    pub fn with_member(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.members.push(AnnotationMember {
            name: name.into(),
            value,
        });
        self
    }

    /// Value of the member called `name`
    pub fn member(&self, name: &str) -> Option<&AnnotationValue> {
        self.members
            .iter()
            .find(|member| member.name == name)
            .map(|member| &member.value)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.type_name)?;
        match self.members.as_slice() {
            [] => Ok(()),
            [only] if only.name == "value" => write!(f, "({})", only.value),
            members => {
                f.write_str("(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {}", member.name, member.value)?;
                }
                f.write_str(")")
            }
        }
    }
}
