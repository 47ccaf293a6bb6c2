//! Read-engine client module.
//!
//! This module provides the HTTP client for asynchronous read engines:
//! configuration, authentication credentials, and the wire-format
//! decoding of engine responses.

mod credentials;
mod read_client;
mod read_config;
mod wire;

pub use credentials::ReadCredentials;
pub use read_client::ReadClient;
pub use read_config::{ReadBuilder, ReadBuilderError, ReadConfig};
