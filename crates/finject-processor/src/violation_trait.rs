//! Violation Trait
//!
//! Generic trait for every diagnostic the processor reports against a declaration.

use finject_domain::ClassName;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Severity level for violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

/// Category of violation for grouping in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationCategory {
    /// Structural problems with an injection target
    Target,
    /// Problems with the aggregator declaration
    Module,
    /// Cross-round consistency, only known late in the compilation
    Consistency,
}

impl Display for ViolationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target => write!(f, "Target"),
            Self::Module => write!(f, "Module"),
            Self::Consistency => write!(f, "Consistency"),
        }
    }
}

/// Generic violation trait
pub trait Violation: Display + Send + Sync {
    /// Unique violation ID (e.g., "FI001")
    fn id(&self) -> &str;

    /// Category for grouping in reports
    fn category(&self) -> ViolationCategory;

    /// Severity level
    fn severity(&self) -> Severity;

    /// Declaration the violation is reported against
    fn element(&self) -> &ClassName;

    /// Human-readable message describing the violation
    fn message(&self) -> String {
        self.to_string()
    }

    /// Suggested fix for the violation (if applicable)
    fn suggestion(&self) -> Option<String> {
        None
    }

    fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}
