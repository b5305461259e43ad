//! Structured description of generated code
//!
//! A small tree of type, field, method, annotation and statement nodes. The processor builds it;
//! an artifact writer renders it to concrete source.

use crate::declarations::Modifier;
use crate::value_objects::{Annotation, ClassName, TypeName, TypeVariableName};
use serde::Serialize;

/// An expression inside a generated method body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// A local or parameter reference
    Name(String),
    /// `this.<name>`
    ThisField(String),
    /// `<receiver>.<method>(<arguments>)`
    Invoke {
        receiver: Box<Expression>,
        method: String,
        arguments: Vec<Expression>,
    },
    /// `new <type>(<arguments>)`
    New {
        type_name: TypeName,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// `<self>.<method>()`
    pub fn invoke(self, method: impl Into<String>) -> Self {
        Self::Invoke {
            receiver: Box::new(self),
            method: method.into(),
            arguments: Vec::new(),
        }
    }
}

/// A statement inside a generated method body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// `<target> = <value>;`
    Assign {
        target: Expression,
        value: Expression,
    },
    /// `return <value>;`
    Return(Expression),
}

/// A field of a generated type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub type_name: TypeName,
    pub name: String,
    pub modifiers: Vec<Modifier>,
}

/// A parameter of a generated method or constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub type_name: TypeName,
    pub name: String,
}

/// Constructor or named method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    Constructor,
    Method {
        name: String,
        returns: Option<TypeName>,
    },
}

/// A method or constructor of a generated type
///
/// Abstract methods carry the `Abstract` modifier and an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSpec {
    pub kind: MethodKind,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub type_variables: Vec<TypeVariableName>,
    pub parameters: Vec<ParameterSpec>,
    pub body: Vec<Statement>,
}

impl MethodSpec {
    /// An empty constructor
    pub fn constructor() -> Self {
        Self::with_kind(MethodKind::Constructor)
    }

    /// An empty `void` method
    pub fn method(name: impl Into<String>) -> Self {
        Self::with_kind(MethodKind::Method {
            name: name.into(),
            returns: None,
        })
    }

    fn with_kind(kind: MethodKind) -> Self {
        Self {
            kind,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            type_variables: Vec::new(),
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn returns(mut self, type_name: TypeName) -> Self {
        if let MethodKind::Method { returns, .. } = &mut self.kind {
            *returns = Some(type_name);
        }
        self
    }

    pub fn add_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn add_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers.extend_from_slice(modifiers);
        self
    }

    pub fn add_type_variables(mut self, variables: Vec<TypeVariableName>) -> Self {
        self.type_variables.extend(variables);
        self
    }

    pub fn add_parameter(mut self, type_name: TypeName, name: impl Into<String>) -> Self {
        self.parameters.push(ParameterSpec {
            type_name,
            name: name.into(),
        });
        self
    }

    pub fn add_statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    /// Method name, `None` for constructors
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            MethodKind::Constructor => None,
            MethodKind::Method { name, .. } => Some(name),
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(&Modifier::Abstract)
    }
}

/// A generated class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSpec {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub superinterfaces: Vec<TypeName>,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
    /// Declarations this type was generated from, for incremental build tooling
    pub originating_elements: Vec<ClassName>,
}

impl TypeSpec {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            superinterfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            originating_elements: Vec::new(),
        }
    }

    pub fn add_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn add_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers.extend_from_slice(modifiers);
        self
    }

    pub fn add_superinterface(mut self, type_name: TypeName) -> Self {
        self.superinterfaces.push(type_name);
        self
    }

    pub fn add_field(
        mut self,
        type_name: TypeName,
        name: impl Into<String>,
        modifiers: &[Modifier],
    ) -> Self {
        self.fields.push(FieldSpec {
            type_name,
            name: name.into(),
            modifiers: modifiers.to_vec(),
        });
        self
    }

    pub fn add_method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn add_originating_element(mut self, element: ClassName) -> Self {
        if !self.originating_elements.contains(&element) {
            self.originating_elements.push(element);
        }
        self
    }

    /// Named methods, skipping constructors
    pub fn named_methods(&self) -> impl Iterator<Item = &MethodSpec> {
        self.methods.iter().filter(|m| m.name().is_some())
    }

    pub fn constructors(&self) -> impl Iterator<Item = &MethodSpec> {
        self.methods.iter().filter(|m| m.name().is_none())
    }
}

/// A generated top-level type plus the package it lives in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JavaFile {
    pub package_name: String,
    pub type_spec: TypeSpec,
    pub file_comment: Option<String>,
}

impl JavaFile {
    pub fn new(package_name: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            package_name: package_name.into(),
            type_spec,
            file_comment: None,
        }
    }

    pub fn with_file_comment(mut self, comment: impl Into<String>) -> Self {
        self.file_comment = Some(comment.into());
        self
    }

    /// Name of the generated type
    pub fn class_name(&self) -> ClassName {
        ClassName::new(self.package_name.clone(), self.type_spec.name.clone())
    }
}
