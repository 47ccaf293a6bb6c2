//! Input payloads for scan operations.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single image to be scanned, as raw bytes plus an optional filename.
///
/// The filename is never interpreted; it is carried through the pipeline
/// for logging and for attributing results back to their source.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Raw image bytes, in whatever encoding the engine accepts
    pub data: Bytes,
    /// Optional source filename for diagnostics and attribution
    pub filename: Option<String>,
}

impl SourceFile {
    /// Creates a new source file from raw bytes.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            filename: None,
        }
    }

    /// Attaches a filename to this source file.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Returns the filename, if one was attached.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
