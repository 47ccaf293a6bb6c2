//! Error types for pipeline runs.

use rxscan_core::{ocr, vocab};

/// Result type alias for pipeline operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can terminate a pipeline run.
///
/// Per-candidate vocabulary failures never appear here; resolution folds
/// them into "no match". A `Vocabulary` error therefore only means the
/// client itself could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No submitted file could be scanned
    #[error(transparent)]
    Scan(#[from] ocr::Error),

    /// The vocabulary client could not be constructed
    #[error(transparent)]
    Vocabulary(#[from] vocab::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_errors_convert_and_keep_their_message() {
        let err = Error::from(ocr::Error::submit("unsupported format"));
        assert!(matches!(err, Error::Scan(_)));
        assert!(err.to_string().contains("unsupported format"));
    }
}
