//! Error types for OCR engine operations.

use std::time::Duration;

use crate::BoxedError;
use crate::ocr::OperationHandle;

/// Result type for all OCR engine operations.
///
/// This is a convenience type alias that defaults to using [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for OCR engine operations.
///
/// [`Timeout`](Error::Timeout) and [`Failed`](Error::Failed) are terminal:
/// the engine has given its answer and retrying the same submission will
/// not change it. Every other variant describes a fault on the way to an
/// answer and is worth retrying from the top.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Engine rejected the submission
    #[error("engine rejected submission: {reason}")]
    Submit {
        reason: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// Polling budget exhausted before the engine finished
    #[error("operation '{operation}' did not finish within {budget:?}")]
    Timeout {
        operation: OperationHandle,
        budget: Duration,
    },

    /// Engine reported that recognition failed
    #[error("text recognition failed: {reason}")]
    Failed {
        reason: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// Transport-level failure talking to the engine
    #[error("engine transport error: {reason}")]
    Transport {
        reason: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// Engine response could not be decoded
    #[error("engine response could not be decoded: {reason}")]
    Decode { reason: String },

    /// Invalid client configuration
    #[error("invalid engine configuration: {reason}")]
    Configuration { reason: String },
}

impl Error {
    /// Create a submission rejection error
    pub fn submit(reason: impl Into<String>) -> Self {
        Self::Submit {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a timeout error for an operation that outlived its polling budget
    pub fn timeout(operation: OperationHandle, budget: Duration) -> Self {
        Self::Timeout { operation, budget }
    }

    /// Create a recognition failure error
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
            source: None,
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

    /// Create a recognition failure wrapping the last error of an exhausted retry loop
    pub fn retries_exhausted(attempts: u32, last: Option<Error>) -> Self {
        Self::Failed {
            reason: format!("scan failed after {attempts} attempt(s)"),
            source: last.map(|err| Box::new(err) as BoxedError),
        }
    }

    /// Check if retrying the whole submit/poll sequence could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Submit { .. } | Self::Transport { .. } | Self::Decode { .. } => true,
            Self::Timeout { .. } | Self::Failed { .. } | Self::Configuration { .. } => false,
        }
    }

    /// Returns the operation handle for timeouts, so callers can report
    /// or cancel the abandoned operation
    pub fn operation(&self) -> Option<&OperationHandle> {
        match self {
            Self::Timeout { operation, .. } => Some(operation),
            _ => None,
        }
    }
}
