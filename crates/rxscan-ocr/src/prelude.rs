//! Convenient re-exports for common use.

pub use crate::backoff::poll_delay;
pub use crate::client::{ReadClient, ReadConfig, ReadCredentials};
pub use crate::scanner::DocumentScanner;
