//! Processor options

use finject_domain::constants::FILE_COMMENT;
use serde::{Deserialize, Serialize};

/// What to do with a target validated after the registration module was emitted
///
/// The module is never regenerated in either case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LateTargetPolicy {
    /// Generate the factory only
    Ignore,
    /// Generate the factory and warn that it is not registered
    #[default]
    Warn,
}

/// Knobs of one processor instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorOptions {
    /// Stamp `@Generated` when the environment provides it
    pub generated_annotation: bool,
    pub late_targets: LateTargetPolicy,
    /// Leading comment of every generated file
    pub file_comment: Option<String>,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            generated_annotation: true,
            late_targets: LateTargetPolicy::default(),
            file_comment: Some(FILE_COMMENT.to_string()),
        }
    }
}
