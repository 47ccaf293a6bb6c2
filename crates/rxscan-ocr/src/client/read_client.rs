//! Read-engine client implementation.
//!
//! Speaks the engine's asynchronous protocol: a submission is a POST of
//! raw image bytes answered with `202 Accepted` plus an
//! `Operation-Location` header, and results are fetched by polling that
//! location until the operation document reports a terminal status.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, ClientBuilder, StatusCode};
use rxscan_core::ServiceHealth;
use rxscan_core::ocr::{Error, OcrEngine, OperationHandle, PollOutcome, Result};
use url::Url;

use super::wire::ReadOperation;
use super::{ReadConfig, ReadCredentials};
use crate::TRACING_TARGET_CLIENT;

/// HTTP client for an asynchronous read engine.
///
/// The client is cheap to clone and safe to share across concurrent
/// scans; it holds no per-operation state.
///
/// # Examples
///
/// ```rust,ignore
/// let config = ReadConfig::builder()
///     .with_endpoint("https://read.example.com/vision/v3.2")?
///     .build()?;
///
/// let credentials = ReadCredentials::api_key("your-api-key");
/// let client = ReadClient::new(config, credentials).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReadClient {
    http_client: HttpClient,
    config: ReadConfig,
    credentials: ReadCredentials,
}

impl ReadClient {
    /// Create a new read-engine client with the given configuration and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub async fn new(config: ReadConfig, credentials: ReadCredentials) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint,
            "Creating read-engine client"
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
            credentials,
        })
    }

    /// Create a new read-engine client with default configuration.
    pub async fn with_defaults(
        endpoint: impl AsRef<str>,
        credentials: ReadCredentials,
    ) -> Result<Self> {
        let config = ReadConfig::builder()
            .with_endpoint(endpoint.as_ref())?
            .build()?;

        Self::new(config, credentials).await
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ReadConfig {
        &self.config
    }

    /// URL of the analyze route, with the language hint when configured.
    fn analyze_url(&self) -> Result<Url> {
        let mut url = self.config.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::configuration("endpoint URL cannot be a base"))?
            .pop_if_empty()
            .extend(["read", "analyze"]);

        if let Some(language) = &self.config.language {
            url.query_pairs_mut().append_pair("language", language);
        }

        Ok(url)
    }

    /// Add authentication headers to a request.
    fn add_auth_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            ReadCredentials::ApiKey(key) => request.header("X-API-Key", key),
            ReadCredentials::BearerToken(token) => {
                request.header("Authorization", format!("Bearer {token}"))
            }
            ReadCredentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            ReadCredentials::None => request,
        }
    }
}

#[async_trait::async_trait]
impl OcrEngine for ReadClient {
    async fn submit(&self, data: Bytes, filename: Option<&str>) -> Result<OperationHandle> {
        let url = self.analyze_url()?;
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            filename = filename.unwrap_or("<unnamed>"),
            bytes = data.len(),
            "Submitting image for recognition"
        );

        let request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data);

        let response = self
            .add_auth_headers(request)
            .send()
            .await
            .map_err(|e| Error::transport_with("submit request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                target: TRACING_TARGET_CLIENT,
                status = status.as_u16(),
                "Engine rejected submission"
            );
            return Err(Error::submit(format!("http {status}: {body}")));
        }

        let Some(location) = response.headers().get("Operation-Location") else {
            return Err(Error::decode(
                "submission accepted but no Operation-Location header returned",
            ));
        };
        let token = location
            .to_str()
            .map_err(|_| Error::decode("Operation-Location header is not valid UTF-8"))?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            operation = token,
            "Submission accepted"
        );
        Ok(OperationHandle::new(token))
    }

    async fn poll(&self, operation: &OperationHandle) -> Result<PollOutcome> {
        let url = Url::parse(operation.as_str())
            .map_err(|e| Error::decode(format!("operation handle is not a URL: {e}")))?;

        let response = self
            .add_auth_headers(self.http_client.get(url))
            .send()
            .await
            .map_err(|e| Error::transport_with("poll request failed", e))?;

        let status = response.status();
        if status.is_success() {
            let document: ReadOperation = response
                .json()
                .await
                .map_err(|e| Error::decode(format!("invalid operation document: {e}")))?;
            return Ok(document.into_outcome());
        }

        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::transport(format!(
                "engine returned http {status} while polling"
            )));
        }

        // Remaining client errors mean the handle itself is bad; a fresh
        // submission is the only way forward.
        Err(Error::failed(format!(
            "engine returned http {status} while polling"
        )))
    }

    /// Health is judged by reachability of the configured endpoint, not
    /// by any engine-specific status route.
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
