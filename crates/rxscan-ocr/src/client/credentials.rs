//! Authentication credentials for the read engine.

/// Authentication credentials for the read-engine API.
///
/// Supports API keys, bearer tokens, and basic authentication.
#[derive(Debug, Clone)]
pub enum ReadCredentials {
    /// API key authentication
    ApiKey(String),
    /// Bearer token authentication
    BearerToken(String),
    /// Basic authentication with username and password
    Basic { username: String, password: String },
    /// No authentication (for testing/development)
    None,
}

impl ReadCredentials {
    /// Create API key credentials
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    /// Create bearer token credentials
    pub fn bearer_token(token: impl Into<String>) -> Self {
        Self::BearerToken(token.into())
    }

    /// Create basic authentication credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create credentials with no authentication
    pub fn none() -> Self {
        Self::None
    }
}
