//! Diagnostic sink
//!
//! Violations are handed to a sink as soon as they are found; reporting never interrupts the
//! validation path.

use crate::violation_trait::{Severity, Violation};
use crate::violations::InjectViolation;
use tracing::{error, info, warn};

/// Receives diagnostics, fire-and-forget
pub trait DiagnosticSink {
    fn report(&mut self, violation: InjectViolation);
}

impl DiagnosticSink for Vec<InjectViolation> {
    fn report(&mut self, violation: InjectViolation) {
        self.push(violation);
    }
}

/// Sink that logs every violation and keeps it for the final report
#[derive(Debug, Default)]
pub struct CollectingSink {
    violations: Vec<InjectViolation>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violations(&self) -> &[InjectViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<InjectViolation> {
        self.violations
    }

    /// Whether any error-level violation was reported
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(Violation::is_error)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, violation: InjectViolation) {
        let element = violation.element().canonical_name();
        match violation.severity() {
            Severity::Error => error!(id = violation.id(), element = %element, "{violation}"),
            Severity::Warning => warn!(id = violation.id(), element = %element, "{violation}"),
            Severity::Info => info!(id = violation.id(), element = %element, "{violation}"),
        }
        self.violations.push(violation);
    }
}
