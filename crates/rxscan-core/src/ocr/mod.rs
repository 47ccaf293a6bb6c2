//! Optical character recognition abstractions.
//!
//! This module defines the contract between the scan pipeline and
//! asynchronous read engines: submit image bytes, receive an opaque
//! [`OperationHandle`], and poll it until the engine reports a terminal
//! [`PollOutcome`]. Concrete engine clients live in `rxscan-ocr`; a
//! scripted engine for tests lives in `rxscan-test`.

use std::sync::Arc;

use bytes::Bytes;

mod error;
mod operation;
mod result;

pub use error::{Error, Result};
pub use operation::{OperationHandle, PollOutcome, ReadLine, ReadPage};
pub use result::{OcrFileResult, OcrLine};

use crate::ServiceHealth;

/// Type alias for a shared, dynamically dispatched OCR engine.
pub type BoxedOcrEngine = Arc<dyn OcrEngine + Send + Sync>;

/// Core trait for asynchronous submit/poll read engines.
#[async_trait::async_trait]
pub trait OcrEngine: Send + Sync {
    /// Submits image bytes for text recognition.
    ///
    /// Returns the handle used to poll for results. The optional filename
    /// is carried for diagnostics only; engines must not interpret it.
    async fn submit(&self, data: Bytes, filename: Option<&str>) -> Result<OperationHandle>;

    /// Polls a previously submitted operation for its current status.
    async fn poll(&self, operation: &OperationHandle) -> Result<PollOutcome>;

    /// Performs a health check against the engine.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
