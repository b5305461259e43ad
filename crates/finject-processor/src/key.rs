//! Binding keys

use crate::query::DeclarationQueries;
use finject_domain::value_objects::well_known;
use finject_domain::{Annotation, ParameterDeclaration, TypeName};
use std::cmp::Ordering;
use std::fmt;

/// A type plus an optional qualifier annotation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub type_name: TypeName,
    pub qualifier: Option<Annotation>,
}

impl Key {
    pub fn new(type_name: TypeName, qualifier: Option<Annotation>) -> Self {
        Self {
            type_name,
            qualifier,
        }
    }

    /// Key for a parameter: its declared type and its first qualifier annotation
    pub fn of_parameter(parameter: &ParameterDeclaration, queries: &DeclarationQueries<'_>) -> Self {
        let qualifier = parameter
            .annotations
            .iter()
            .find(|annotation| queries.is_qualifier(annotation))
            .cloned();
        Self::new(parameter.type_name.clone(), qualifier)
    }

    /// True when the key's type is already a `Provider<...>`
    pub fn is_provider(&self) -> bool {
        self.type_name
            .is_parameterized_by(&well_known::JAVAX_PROVIDER)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{qualifier} {}", self.type_name),
            None => write!(f, "{}", self.type_name),
        }
    }
}

/// Type string first, then qualified keys before unqualified ones
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_name
            .to_string()
            .cmp(&other.type_name.to_string())
            .then_with(|| {
                self.qualifier
                    .is_none()
                    .cmp(&other.qualifier.is_none())
            })
            .then_with(|| self.qualifier.cmp(&other.qualifier))
            .then_with(|| self.type_name.cmp(&other.type_name))
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
