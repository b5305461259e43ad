//! Application configuration root

use super::{LoggingConfig, OutputConfig, ProcessorConfig};
use finject_processor::ProcessorOptions;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Processor behavior
    pub processor: ProcessorConfig,
    /// Where and how generated sources are written
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Options handed to the processor
    pub fn processor_options(&self) -> ProcessorOptions {
        let comment = self.output.file_comment.trim();
        ProcessorOptions {
            generated_annotation: self.processor.generated_annotation,
            late_targets: self.processor.late_targets,
            file_comment: (!comment.is_empty()).then(|| comment.to_string()),
        }
    }
}
