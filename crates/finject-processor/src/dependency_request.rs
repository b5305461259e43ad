//! Dependency requests
//!
//! One request per parameter of the marked constructor. Every request is held by the generated
//! factory as a `Provider` and resolved when the target is created.

use crate::key::Key;
use crate::query::DeclarationQueries;
use finject_domain::value_objects::well_known;
use finject_domain::{Expression, ParameterDeclaration, TypeName};
use std::fmt;

/// A named [`Key`], named after the originating parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyRequest {
    pub key: Key,
    pub name: String,
}

impl DependencyRequest {
    pub fn new(key: Key, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }

    pub fn of_parameter(parameter: &ParameterDeclaration, queries: &DeclarationQueries<'_>) -> Self {
        Self::new(Key::of_parameter(parameter, queries), parameter.name.clone())
    }

    /// Type the factory holds this request as
    ///
    /// `Provider<T>` for a plain `T` (boxed when primitive); a request that is already a
    /// `Provider` is never wrapped twice. The qualifier, if any, annotates the result.
    pub fn provider_type(&self) -> TypeName {
        let type_name = if self.key.is_provider() {
            self.key.type_name.clone()
        } else {
            TypeName::parameterized(
                well_known::JAVAX_PROVIDER.clone(),
                vec![self.key.type_name.boxed()],
            )
        };
        match &self.key.qualifier {
            Some(qualifier) => type_name.annotated(vec![qualifier.clone()]),
            None => type_name,
        }
    }

    /// Constructor argument passed to the target: the provider itself or `name.get()`
    pub fn argument(&self) -> Expression {
        let field = Expression::name(self.name.clone());
        if self.key.is_provider() {
            field
        } else {
            field.invoke("get")
        }
    }
}

impl fmt::Display for DependencyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.name)
    }
}
