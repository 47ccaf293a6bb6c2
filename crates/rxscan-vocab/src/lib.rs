#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for vocabulary client operations.
pub const TRACING_TARGET_CLIENT: &str = "rxscan_vocab::client";

mod client;
mod config;

pub use crate::client::VocabClient;
pub use crate::config::{VocabBuilder, VocabBuilderError, VocabConfig};
