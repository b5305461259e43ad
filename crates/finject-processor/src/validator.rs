//! Injection target validation
//!
//! Checks a candidate type for every structural rule before any code is generated for it.

use crate::diagnostics::DiagnosticSink;
use crate::query::DeclarationQueries;
use crate::violations::InjectViolation;
use finject_domain::value_objects::well_known;
use finject_domain::{ConstructorDeclaration, Modifier, TypeDeclaration};
use tracing::debug;

/// A validated target and its single `@FragmentInject` constructor
#[derive(Debug, Clone, Copy)]
pub struct FragmentInjectElements<'a> {
    pub target_type: &'a TypeDeclaration,
    pub target_constructor: &'a ConstructorDeclaration,
}

/// Validates injection target candidates
pub struct TargetValidator<'a> {
    queries: DeclarationQueries<'a>,
}

impl<'a> TargetValidator<'a> {
    pub fn new(queries: DeclarationQueries<'a>) -> Self {
        Self { queries }
    }

    /// Validate `candidate`, reporting every problem found
    ///
    /// Requires a non-private, non-inner fragment with exactly one non-private marked
    /// constructor. Type-level problems are all reported before giving up; the constructor's
    /// own visibility is only checked once those pass.
    pub fn validate(
        &self,
        candidate: &'a TypeDeclaration,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<FragmentInjectElements<'a>> {
        let element = &candidate.name;
        let mut valid = true;

        if candidate.has_modifier(Modifier::Private) {
            sink.report(InjectViolation::PrivateTarget {
                element: element.clone(),
            });
            valid = false;
        }
        if self.queries.requires_enclosing_instance(candidate) {
            sink.report(InjectViolation::InnerTarget {
                element: element.clone(),
            });
            valid = false;
        }
        if !self.queries.is_fragment(candidate) {
            sink.report(InjectViolation::NotAFragment {
                element: element.clone(),
            });
            valid = false;
        }

        let constructors: Vec<&'a ConstructorDeclaration> = candidate
            .constructors
            .iter()
            .filter(|c| c.has_annotation(&well_known::FRAGMENT_INJECT))
            .collect();
        if constructors.len() > 1 {
            sink.report(InjectViolation::MultipleInjectConstructors {
                element: element.clone(),
            });
            valid = false;
        }

        if !valid {
            debug!(target_type = %element, "Dropping invalid @FragmentInject candidate");
            return None;
        }

        let [constructor] = constructors.as_slice() else {
            debug!(target_type = %element, "No @FragmentInject constructor on candidate");
            return None;
        };
        if constructor.has_modifier(Modifier::Private) {
            sink.report(InjectViolation::PrivateInjectConstructor {
                element: element.clone(),
            });
            return None;
        }

        Some(FragmentInjectElements {
            target_type: candidate,
            target_constructor: constructor,
        })
    }
}
