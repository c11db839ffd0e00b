//! CNV Processor Library
//!
//! A Rust library for parsing Seabird CNV oceanographic CTD cast files:
//! a free-form ASCII header followed by a fixed-width numeric data block.
//!
//! This library provides tools for:
//! - Extracting and parsing CNV headers with tolerant handling of historical dialects
//! - Parsing IOW cruise/station/position metadata embedded in the header
//! - Resolving raw channel names to standardized identifiers via an ordered rule file
//! - Assembling the numeric data block into a record table addressable by raw
//!   and standardized channel names
//! - Optional derived seawater-property computation through an injected capability
//! - Diagnostics collection and a validity flag instead of hard failures on
//!   malformed input

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cnv_parser;
        pub mod derived;
        pub mod naming_registry;
        pub mod region;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Channel, HeaderInfo, IowMetadata, Position};
pub use app::services::cnv_parser::{CnvCast, CnvParser};
pub use app::services::naming_registry::NamingRegistry;
pub use config::ParserConfig;

/// Result type alias for the CNV processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CNV processing operations
///
/// Malformed CNV *content* never surfaces here: the parser downgrades it to
/// diagnostics and a validity flag on the result. These variants cover the
/// surrounding machinery (I/O, rule files, configuration, traversal).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Naming-rule file could not be loaded or parsed
    #[error("Naming-rule error in '{path}': {message}")]
    RuleFile {
        path: String,
        message: String,
        #[source]
        source: Option<serde_yaml::Error>,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A parsed file was not a valid CNV cast
    #[error("Invalid CNV file '{file}': {message}")]
    InvalidCast { file: String, message: String },

    /// Derived-computation capability failed
    #[error("Derived computation error: {message}")]
    DerivedComputation { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a rule-file error with context
    pub fn rule_file(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_yaml::Error>,
    ) -> Self {
        Self::RuleFile {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid-cast error
    pub fn invalid_cast(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCast {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a derived-computation error
    pub fn derived_computation(message: impl Into<String>) -> Self {
        Self::DerivedComputation {
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
