//! Processor configuration types

use crate::constants::DEFAULT_MAX_ROUNDS;
use finject_processor::LateTargetPolicy;
use serde::{Deserialize, Serialize};

/// Processor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Stamp `@Generated` on generated types when the declaration graph provides it
    pub generated_annotation: bool,

    /// Handling of targets found after the registration module was generated
    pub late_targets: LateTargetPolicy,

    /// Maximum number of rounds before the compilation is aborted
    pub max_rounds: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            generated_annotation: true,
            late_targets: LateTargetPolicy::default(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}
