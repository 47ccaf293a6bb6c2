//! Error types for vocabulary operations.

use crate::BoxedError;

/// Result type for all vocabulary operations.
///
/// This is a convenience type alias that defaults to using [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for vocabulary operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Vocabulary service rejected the lookup
    #[error("vocabulary lookup for '{name}' failed: {reason}")]
    Lookup { name: String, reason: String },

    /// Transport-level failure talking to the vocabulary service
    #[error("vocabulary transport error: {reason}")]
    Transport {
        reason: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// Vocabulary response could not be decoded
    #[error("vocabulary response could not be decoded: {reason}")]
    Decode { reason: String },

    /// Invalid client configuration
    #[error("invalid vocabulary configuration: {reason}")]
    Configuration { reason: String },
}

impl Error {
    /// Create a lookup rejection error
    pub fn lookup(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Lookup {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a transport error wrapping its underlying cause
    pub fn transport_with(reason: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        Self::Transport {
            reason: reason.into(),
            source: Some(source.into()),
        }
    }

    /// Create a response decoding error
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}
