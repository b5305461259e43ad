//! Output configuration types

use crate::constants::DEFAULT_OUTPUT_DIR;
use finject_domain::constants::FILE_COMMENT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory generated sources are written under, one folder per package segment
    pub directory: PathBuf,

    /// Leading comment of every generated file; empty disables it
    pub file_comment: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_comment: FILE_COMMENT.to_string(),
        }
    }
}
