#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for end-to-end pipeline runs.
pub const TRACING_TARGET_PIPELINE: &str = "rxscan_pipeline";

/// Tracing target for candidate resolution and aggregation.
pub const TRACING_TARGET_RESOLVE: &str = "rxscan_pipeline::resolve";

mod error;
mod medication;
mod pipeline;
#[doc(hidden)]
pub mod prelude;
mod resolve;

pub use crate::error::{Error, Result};
pub use crate::medication::{MedicationReport, ResolvedMedication, ScanStats};
pub use crate::pipeline::ScanPipeline;
pub use crate::resolve::resolve_and_aggregate;
