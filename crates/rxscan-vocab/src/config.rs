//! Vocabulary client configuration.

use std::time::Duration;

use derive_builder::Builder;
use rxscan_core::vocab::Error;
use url::Url;

/// Configuration for the vocabulary client.
#[derive(Debug, Clone, Builder)]
#[builder(
    name = "VocabBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct VocabConfig {
    /// Base URL of the vocabulary API
    #[builder(setter(custom), default = "VocabConfig::default_endpoint()")]
    pub endpoint: Url,
    /// Request timeout duration
    #[builder(default = "Duration::from_secs(10)")]
    pub timeout: Duration,
    /// Connection timeout duration
    #[builder(default = "Duration::from_secs(5)")]
    pub connect_timeout: Duration,
    /// Maximum records requested per lookup
    #[builder(default = "20")]
    pub max_results: usize,
    /// API key sent with each request, when the service requires one
    #[builder(default)]
    pub api_key: Option<String>,
    /// User agent string for requests
    #[builder(default = "VocabConfig::default_user_agent()")]
    pub user_agent: String,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            max_results: 20,
            api_key: None,
            user_agent: Self::default_user_agent(),
        }
    }
}

impl VocabConfig {
    /// Create a new configuration builder
    pub fn builder() -> VocabBuilder {
        VocabBuilder::default()
    }

    fn default_endpoint() -> Url {
        "https://vocab.rxscan.dev/api/v1"
            .parse()
            .expect("Valid default URL")
    }

    fn default_user_agent() -> String {
        format!("rxscan-vocab/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl VocabBuilder {
    /// Set the base URL of the vocabulary API
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

        if let Some(max_results) = &self.max_results {
            if *max_results == 0 {
                return Err("Result cap must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

impl From<VocabBuilderError> for Error {
    fn from(err: VocabBuilderError) -> Self {
        Error::configuration(err.to_string())
    }
}
