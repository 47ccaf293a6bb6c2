//! Read-engine client configuration.

use std::time::Duration;

use derive_builder::Builder;
use rxscan_core::ocr::Error;
use url::Url;

/// Configuration for the read-engine client.
///
/// Contains the engine endpoint plus the transport and polling settings
/// used when scanning documents through it.
#[derive(Debug, Clone, Builder)]
#[builder(
    name = "ReadBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct ReadConfig {
    /// Base URL of the read-engine API
    #[builder(setter(custom), default = "ReadConfig::default_endpoint()")]
    pub endpoint: Url,
    /// Request timeout duration
    #[builder(default = "Duration::from_secs(30)")]
    pub timeout: Duration,
    /// Connection timeout duration
    #[builder(default = "Duration::from_secs(10)")]
    pub connect_timeout: Duration,
    /// Wall-clock polling budget per scanned file
    #[builder(default = "Duration::from_secs(60)")]
    pub max_polling: Duration,
    /// Maximum whole-sequence retries after the first attempt
    #[builder(default = "3")]
    pub max_retries: u32,
    /// Recognition language hint forwarded to the engine
    #[builder(default)]
    pub language: Option<String>,
    /// User agent string for requests
    #[builder(default = "ReadConfig::default_user_agent()")]
    pub user_agent: String,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_polling: Duration::from_secs(60),
            max_retries: 3,
            language: None,
            user_agent: Self::default_user_agent(),
        }
    }
}

impl ReadConfig {
    /// Create a new configuration builder
    pub fn builder() -> ReadBuilder {
        ReadBuilder::default()
    }

    fn default_endpoint() -> Url {
        "https://read.rxscan.dev/vision/v3.2"
            .parse()
            .expect("Valid default URL")
    }

    fn default_user_agent() -> String {
        format!("rxscan-ocr/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl ReadBuilder {
    /// Set the base URL of the read-engine API
    pub fn with_endpoint(mut self, url: &str) -> Result<Self, Error> {
        self.endpoint = Some(url.parse().map_err(|e| {
            Error::configuration(format!("invalid endpoint URL '{url}': {e}"))
        })?);
        Ok(self)
    }

    fn validate_config(&self) -> Result<(), String> {
        if let Some(timeout) = &self.timeout {
            if timeout.is_zero() {
                return Err("Timeout must be greater than 0".to_string());
            }
        }

        if let Some(connect_timeout) = &self.connect_timeout {
            if connect_timeout.is_zero() {
                return Err("Connect timeout must be greater than 0".to_string());
            }
        }

        if let Some(max_polling) = &self.max_polling {
            if max_polling.is_zero() {
                return Err("Polling budget must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

impl From<ReadBuilderError> for Error {
    fn from(err: ReadBuilderError) -> Self {
        Error::configuration(err.to_string())
    }
}
