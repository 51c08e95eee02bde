//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading optimizer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON or does not match the schema.
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// A tag family cannot be matched against word content.
    #[error("Invalid tag family at index {index}: {message}")]
    InvalidFamily {
        /// Position of the family in the table.
        index: usize,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Creates an invalid family error.
    pub fn invalid_family(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidFamily {
            index,
            message: message.into(),
        }
    }
}
