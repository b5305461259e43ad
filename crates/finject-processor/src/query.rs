//! Declaration queries
//!
//! Thin lookups over a [`DeclarationEnvironment`] phrased in the processor's terms.

use finject_domain::value_objects::well_known;
use finject_domain::{
    Annotation, DeclarationEnvironment, DeclarationKind, MarkedElement, TypeDeclaration,
};
use tracing::debug;

/// Processor-level queries over one round's declaration environment
#[derive(Clone, Copy)]
pub struct DeclarationQueries<'a> {
    env: &'a dyn DeclarationEnvironment,
}

impl<'a> DeclarationQueries<'a> {
    pub fn new(env: &'a dyn DeclarationEnvironment) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &'a dyn DeclarationEnvironment {
        self.env
    }

    /// Types with at least one `@FragmentInject` constructor, each listed once
    pub fn inject_candidates(&self) -> Vec<&'a TypeDeclaration> {
        let mut candidates: Vec<&'a TypeDeclaration> = Vec::new();
        for element in self.env.find_declarations_marked(&well_known::FRAGMENT_INJECT) {
            // The marker only applies to constructors
            let MarkedElement::Constructor { owner, .. } = &element else {
                continue;
            };
            if candidates.iter().any(|c| &c.name == owner) {
                continue;
            }
            match self.env.find_type(owner) {
                Some(declaration) => candidates.push(declaration),
                None => debug!(owner = %owner, "Marked constructor without a resolvable owner"),
            }
        }
        candidates
    }

    /// Types annotated `@FragmentModule`
    pub fn module_candidates(&self) -> Vec<&'a TypeDeclaration> {
        self.env
            .find_declarations_marked(&well_known::FRAGMENT_MODULE)
            .iter()
            .filter_map(|element| match element {
                MarkedElement::Type(name) => self.env.find_type(name),
                MarkedElement::Constructor { .. } => None,
            })
            .collect()
    }

    /// Whether `declaration` is (transitively) a fragment
    pub fn is_fragment(&self, declaration: &TypeDeclaration) -> bool {
        self.env
            .is_subtype_of(&declaration.name, &well_known::FRAGMENT)
    }

    /// Whether `declaration` is nested in a class and needs an instance of it
    ///
    /// Members of interfaces and enums never capture an enclosing instance. An enclosing type
    /// that can't be resolved is treated as a class.
    pub fn requires_enclosing_instance(&self, declaration: &TypeDeclaration) -> bool {
        let Some(enclosing) = declaration.name.enclosing_class_name() else {
            return false;
        };
        let enclosing_kind = self
            .env
            .find_type(&enclosing)
            .map_or(DeclarationKind::Class, |e| e.kind);
        enclosing_kind == DeclarationKind::Class
            && !declaration.has_modifier(finject_domain::Modifier::Static)
    }

    /// Whether `annotation`'s type is itself a `@Qualifier`
    pub fn is_qualifier(&self, annotation: &Annotation) -> bool {
        self.env
            .has_marker(&annotation.type_name, &well_known::JAVAX_QUALIFIER)
    }

    /// Whether `declaration` is a Dagger `@Module`
    pub fn is_dagger_module(&self, declaration: &TypeDeclaration) -> bool {
        self.env
            .has_marker(&declaration.name, &well_known::DAGGER_MODULE)
    }
}
