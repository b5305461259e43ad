//! Error handling types
//!
//! These errors describe failures of the tooling itself (I/O, malformed declaration graphs,
//! configuration). Problems found in the processed declarations are reported as diagnostics,
//! never as `Error`s.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for finject
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {source}")]
    Yaml {
        /// The underlying YAML error
        #[from]
        source: serde_yaml::Error,
    },

    /// A type or member name that cannot be represented
    #[error("Invalid name '{name}': {reason}")]
    InvalidName {
        /// The offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A declaration graph that is structurally inconsistent
    #[error("Invalid declaration: {message}")]
    InvalidDeclaration {
        /// Description of the problem
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// The same generated type was written twice in one compilation
    #[error("Attempt to recreate a file for type {type_name}")]
    DuplicateArtifact {
        /// Canonical name of the generated type
        type_name: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure error with context
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create an invalid name error
    pub fn invalid_name<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid declaration error
    pub fn invalid_declaration<S: Into<String>>(message: S) -> Self {
        Self::InvalidDeclaration {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a duplicate artifact error
    pub fn duplicate_artifact<S: Into<String>>(type_name: S) -> Self {
        Self::DuplicateArtifact {
            type_name: type_name.into(),
        }
    }

    /// Create a configuration error without a source
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
