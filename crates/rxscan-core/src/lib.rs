#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # Rxscan Core
//!
//! This crate provides the foundational abstractions for the rxscan label
//! pipeline. It defines the traits and types for OCR engines and drug
//! vocabulary providers without depending on any concrete implementations.

mod error;
mod health;
mod source;

pub mod ocr;
#[doc(hidden)]
pub mod prelude;
pub mod vocab;

// Re-export key types for convenience
pub use error::BoxedError;
pub use health::{ServiceHealth, ServiceStatus};
pub use source::SourceFile;
