//! Error types for the argv codec
//!
//! Every transform failure is a typed value returned to the caller; a failed
//! parse or assemble produces no partial output.

use thiserror::Error;

/// Main error type for parse and assemble transforms
#[derive(Error, Debug)]
pub enum CodecError {
    /// A grouped-flag run was opened but never closed
    #[error("incomplete multiple-flag group starting at {flag}")]
    IncompleteMultipleFlag { flag: String },

    /// A flag token matched no configured flag and policy forbids unknowns
    #[error("unconfigured flag {flag} for command {command}")]
    UnconfiguredFlag { flag: String, command: String },

    /// A value-taking flag appeared without a value
    #[error("missing value for flag {flag}")]
    MissingFlagValue { flag: String },

    /// The bare "--" sentinel appeared while policy forbids it
    #[error("double dash is not allowed")]
    DisallowedDoubleDash,
}

impl CodecError {
    /// Create a new incomplete multiple-flag error
    pub fn incomplete_multiple_flag(flag: impl Into<String>) -> Self {
        Self::IncompleteMultipleFlag { flag: flag.into() }
    }

    /// Create a new unconfigured flag error
    pub fn unconfigured_flag(flag: impl Into<String>, command: impl Into<String>) -> Self {
        Self::UnconfiguredFlag {
            flag: flag.into(),
            command: command.into(),
        }
    }

    /// Create a new missing flag value error
    pub fn missing_flag_value(flag: impl Into<String>) -> Self {
        Self::MissingFlagValue { flag: flag.into() }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CodecError>;
