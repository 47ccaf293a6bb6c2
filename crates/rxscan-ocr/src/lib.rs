#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for read-engine client operations.
///
/// Use this target for logging client initialization, submissions, and polling.
pub const TRACING_TARGET_CLIENT: &str = "rxscan_ocr::client";

/// Tracing target for document scanning and batch orchestration.
pub const TRACING_TARGET_SCANNER: &str = "rxscan_ocr::scanner";

mod backoff;
mod client;
#[doc(hidden)]
pub mod prelude;
mod scanner;

pub use crate::backoff::poll_delay;
pub use crate::client::{ReadBuilder, ReadBuilderError, ReadClient, ReadConfig, ReadCredentials};
pub use crate::scanner::{DEFAULT_MAX_POLLING, DEFAULT_MAX_RETRIES, DocumentScanner};
