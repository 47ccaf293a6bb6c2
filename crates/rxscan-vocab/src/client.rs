//! Vocabulary client implementation.

use reqwest::{Client as HttpClient, ClientBuilder, StatusCode};
use rxscan_core::ServiceHealth;
use rxscan_core::vocab::{DrugRecord, Error, Result, VocabProvider};
use serde::Deserialize;
use url::Url;

use crate::TRACING_TARGET_CLIENT;
use crate::config::VocabConfig;

/// HTTP client for the drug vocabulary service.
///
/// A search is a single request; the client holds no per-lookup state
/// and is cheap to clone.
///
/// # Examples
///
/// ```rust,ignore
/// let config = VocabConfig::builder()
///     .with_endpoint("https://vocab.example.com/api/v1")?
///     .build()?;
///
/// let client = VocabClient::new(config).await?;
/// let records = client.search("aspirin").await?;
/// ```
#[derive(Debug, Clone)]
pub struct VocabClient {
    http_client: HttpClient,
    config: VocabConfig,
}

impl VocabClient {
    /// Create a new vocabulary client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub async fn new(config: VocabConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint,
            "Creating vocabulary client"
        );

        let http_client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::transport_with("failed to build HTTP client", e))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create a new vocabulary client with default configuration.
    pub async fn with_defaults(endpoint: impl AsRef<str>) -> Result<Self> {
        let config = VocabConfig::builder()
            .with_endpoint(endpoint.as_ref())?
            .build()?;

        Self::new(config).await
    }

    /// Get the client configuration.
    pub fn config(&self) -> &VocabConfig {
        &self.config
    }

    /// URL of the drug search route for a candidate name.
    fn search_url(&self, name: &str) -> Result<Url> {
        let mut url = self.config.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::configuration("endpoint URL cannot be a base"))?
            .pop_if_empty()
            .push("drugs");

        url.query_pairs_mut()
            .append_pair("name", name)
            .append_pair("limit", &self.config.max_results.to_string());

        Ok(url)
    }

    /// Add authentication headers to a request.
    fn add_auth_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("X-API-Key", key),
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl VocabProvider for VocabClient {
    async fn search(&self, name: &str) -> Result<Vec<DrugRecord>> {
        let url = self.search_url(name)?;
        let response = self
            .add_auth_headers(self.http_client.get(url))
            .send()
            .await
            .map_err(|e| Error::transport_with("search request failed", e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // Some vocabularies answer unknown names with 404 instead of
            // an empty list; both mean "no match".
            tracing::debug!(
                target: TRACING_TARGET_CLIENT,
                name = name,
                "Vocabulary has no entry"
            );
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(Error::lookup(name, format!("http {status}")));
        }

        let document: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::decode(format!("invalid search response: {e}")))?;

        let mut records: Vec<DrugRecord> =
            document.drugs.into_iter().map(DrugRecord::from).collect();
        records.truncate(self.config.max_results);

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            name = name,
            matches = records.len(),
            "Vocabulary search finished"
        );
        Ok(records)
    }

    /// Health is judged by reachability of the configured endpoint.
    async fn health_check(&self) -> Result<ServiceHealth> {
        let started = std::time::Instant::now();
        let request = self.http_client.get(self.config.endpoint.clone());

        let health = match self.add_auth_headers(request).send().await {
            Ok(response) if response.status().is_success() => ServiceHealth::healthy(),
            Ok(response) => {
                ServiceHealth::degraded(format!("endpoint answered http {}", response.status()))
            }
            Err(e) => ServiceHealth::unhealthy(format!("endpoint unreachable: {e}")),
        };

        Ok(health.with_response_time(started.elapsed()))
    }
}

/// Search response document.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    drugs: Vec<WireRecord>,
}

/// A single vocabulary record as the service returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    canonical_name: String,
    synonym: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl From<WireRecord> for DrugRecord {
    fn from(wire: WireRecord) -> Self {
        Self {
            canonical_name: wire.canonical_name,
            synonym: wire.synonym,
            kind: wire.kind,
        }
    }
}
