//! Error types and result aliases for Formdeck.
//!
//! This module defines the shared error types used by the core domain layer.
//! Network-facing errors live in `formdeck-client`; everything here is local
//! and synchronous (validation, viewer preconditions, configuration).

/// The result type used throughout the core crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in local Formdeck operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input was rejected before reaching the network.
    #[error("validation failed: {message}")]
    Validation {
        /// User-facing description of what was rejected.
        message: String,
    },

    /// A precondition for opening a document in the viewer was not met.
    #[error("viewer precondition failed: {message}")]
    Viewer {
        /// User-facing description of the failed precondition.
        message: String,
    },

    /// The configuration is unusable.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl Error {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a new viewer precondition error.
    #[must_use]
    pub fn viewer(message: impl Into<String>) -> Self {
        Self::Viewer {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns the user-facing message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message } | Self::Viewer { message } | Self::Configuration { message } => {
                message
            }
        }
    }
}
