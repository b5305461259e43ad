//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `finject_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "finject.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "finject";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "FINJECT";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "FINJECT_LOG";

/// Daily log files kept by default
pub const LOG_MAX_FILES: usize = 5;

// ============================================================================
// PROCESSING CONSTANTS
// ============================================================================

/// Upper bound on compilation rounds
pub const DEFAULT_MAX_ROUNDS: usize = 16;

/// Default directory generated sources are written to
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated/source/finject";

/// Extensions of declaration graph files
pub const GRAPH_FILE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Extension of generated source files
pub const JAVA_FILE_EXTENSION: &str = "java";

/// Indentation unit of generated sources
pub const JAVA_INDENT: &str = "  ";
