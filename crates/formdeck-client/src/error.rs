//! Error types for the request pipeline.

/// The result type used throughout formdeck-client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the request pipeline.
///
/// Transport failures, timeouts, malformed envelopes, and `ok:false`
/// responses all map into the variant of the operation that failed; the
/// message is user-facing and, for malformed bodies, carries the raw
/// response text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Listing the catalog failed after exhausting the retry budget.
    #[error("load failed: {message}")]
    Load {
        /// User-facing description of the terminal failure.
        message: String,
    },

    /// Saving an entry failed. Mutations are not retried.
    #[error("save failed: {message}")]
    Save {
        /// User-facing description of the failure.
        message: String,
    },

    /// Deleting an entry failed. Mutations are not retried.
    #[error("delete failed: {message}")]
    Delete {
        /// User-facing description of the failure.
        message: String,
    },
}

impl Error {
    /// Creates a new load error.
    #[must_use]
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }

    /// Creates a new save error.
    #[must_use]
    pub fn save(message: impl Into<String>) -> Self {
        Self::Save {
            message: message.into(),
        }
    }

    /// Creates a new delete error.
    #[must_use]
    pub fn delete(message: impl Into<String>) -> Self {
        Self::Delete {
            message: message.into(),
        }
    }

    /// Returns the user-facing message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Load { message } | Self::Save { message } | Self::Delete { message } => message,
        }
    }
}
