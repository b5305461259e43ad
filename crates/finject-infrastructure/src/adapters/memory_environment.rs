//! In-memory declaration environment
//!
//! Backs the processor with a [`DeclarationGraph`]. The environment grows as the compilation
//! proceeds: every generated type is registered as a stub declaration and becomes a root of the
//! next round.

use super::graph::DeclarationGraph;
use finject_domain::error::{Error, Result};
use finject_domain::value_objects::well_known;
use finject_domain::{
    Annotation, AnnotationValue, ClassName, DeclarationEnvironment, DeclarationKind, JavaFile,
    MarkedElement, TypeDeclaration, TypeName,
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Declarations known to the compilation plus the roots of the current round
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironment {
    types: Vec<TypeDeclaration>,
    index: HashMap<ClassName, usize>,
    roots: Vec<ClassName>,
}

impl InMemoryEnvironment {
    /// Environment over `graph`, with its sources as the roots of the first round
    ///
    /// The fragment base type and `javax.inject.Named` are always resolvable; graphs may
    /// declare them explicitly. A type declared twice is an error.
    pub fn from_graph(graph: DeclarationGraph) -> Result<Self> {
        let mut env = Self::default();
        let roots: Vec<ClassName> = graph.sources.iter().map(|t| t.name.clone()).collect();
        for declaration in graph.sources.into_iter().chain(graph.classpath) {
            env.insert(declaration)?;
        }
        for builtin in builtin_declarations() {
            if !env.index.contains_key(&builtin.name) {
                env.insert(builtin)?;
            }
        }
        env.roots = roots;
        Ok(env)
    }

    fn insert(&mut self, declaration: TypeDeclaration) -> Result<()> {
        if self.index.contains_key(&declaration.name) {
            return Err(Error::invalid_declaration(format!(
                "Type {} is declared more than once",
                declaration.name
            )));
        }
        self.index
            .insert(declaration.name.clone(), self.types.len());
        self.types.push(declaration);
        Ok(())
    }

    /// Roots of the current round
    pub fn roots(&self) -> &[ClassName] {
        &self.roots
    }

    /// Replace the roots of the current round
    pub fn set_roots(&mut self, roots: Vec<ClassName>) {
        self.roots = roots;
    }

    /// Every known declaration, in registration order
    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.types
    }

    /// Make a generated type resolvable
    ///
    /// The stub carries the generated type's modifiers, annotations and superinterfaces, which
    /// is all later rounds can observe of it.
    pub fn register_generated(&mut self, file: &JavaFile) -> Result<ClassName> {
        let name = file.class_name();
        let spec = &file.type_spec;
        let mut stub = TypeDeclaration::class(name.clone());
        stub.modifiers = spec.modifiers.clone();
        stub.annotations = spec.annotations.clone();
        stub.interfaces = spec.superinterfaces.clone();
        self.insert(stub)?;
        debug!(generated = %name, "Registered generated type");
        Ok(name)
    }

    /// Resolve the class literals in `value` against what is known now
    fn resolve_value(&self, context: &ClassName, value: &AnnotationValue) -> AnnotationValue {
        match value {
            AnnotationValue::Class(type_name) => match type_name.raw_class_name() {
                Some(raw) if !self.index.contains_key(raw) => {
                    AnnotationValue::Error(raw.simple_name().to_string())
                }
                _ => AnnotationValue::Class(type_name.clone()),
            },
            AnnotationValue::Error(written) => match self.resolve_written_name(context, written) {
                Some(resolved) => AnnotationValue::class(resolved),
                None => value.clone(),
            },
            AnnotationValue::Array(values) => AnnotationValue::Array(
                values
                    .iter()
                    .map(|v| self.resolve_value(context, v))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// A name as written in source: fully qualified, or simple and in the declaring package
    fn resolve_written_name(&self, context: &ClassName, written: &str) -> Option<ClassName> {
        if let Ok(qualified) = ClassName::best_guess(written) {
            if self.index.contains_key(&qualified) {
                return Some(qualified);
            }
        }
        let local = ClassName::get(context.package_name(), written.split('.')).ok()?;
        self.index.contains_key(&local).then_some(local)
    }
}

/// Declarations every compilation can resolve
fn builtin_declarations() -> Vec<TypeDeclaration> {
    let named = ClassName::new("javax.inject", "Named");
    vec![
        TypeDeclaration::class(well_known::FRAGMENT.clone()),
        TypeDeclaration::class(named)
            .with_kind(DeclarationKind::Annotation)
            .with_annotation(Annotation::marker(well_known::JAVAX_QUALIFIER.clone())),
    ]
}

impl DeclarationEnvironment for InMemoryEnvironment {
    fn find_declarations_marked(&self, marker: &ClassName) -> Vec<MarkedElement> {
        let mut found = Vec::new();
        for root in &self.roots {
            let Some(declaration) = self.find_type(root) else {
                continue;
            };
            if declaration.annotation(marker).is_some() {
                found.push(MarkedElement::Type(root.clone()));
            }
            for (index, constructor) in declaration.constructors.iter().enumerate() {
                if constructor.has_annotation(marker) {
                    found.push(MarkedElement::Constructor {
                        owner: root.clone(),
                        index,
                    });
                }
            }
        }
        found
    }

    fn find_type(&self, name: &ClassName) -> Option<&TypeDeclaration> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    fn is_subtype_of(&self, sub: &ClassName, sup: &ClassName) -> bool {
        let mut seen = HashSet::new();
        let mut queue = vec![sub.clone()];
        while let Some(current) = queue.pop() {
            if &current == sup {
                return true;
            }
            if !seen.insert(current.clone()) {
                continue;
            }
            if let Some(declaration) = self.find_type(&current) {
                queue.extend(
                    declaration
                        .supertypes()
                        .filter_map(TypeName::raw_class_name)
                        .cloned(),
                );
            }
        }
        false
    }

    fn has_marker(&self, declaration: &ClassName, marker: &ClassName) -> bool {
        self.find_type(declaration)
            .is_some_and(|d| d.annotation(marker).is_some())
    }

    fn read_annotation_value(
        &self,
        declaration: &ClassName,
        annotation: &ClassName,
        member: &str,
    ) -> Option<AnnotationValue> {
        let value = self
            .find_type(declaration)?
            .annotation(annotation)?
            .member(member)?;
        Some(self.resolve_value(declaration, value))
    }
}
