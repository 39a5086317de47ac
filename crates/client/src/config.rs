//! Client configuration loaded from environment variables.

/// Connection settings for one effigy backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the HTTP API, including the `/api` root
    /// (e.g. `http://localhost:8000/api`).
    pub api_url: String,
    /// Static API token, sent as a bearer `Authorization` header on every
    /// request when set.
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a configuration for the given base URL, without a token.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: None,
        }
    }

    /// Attach a static API token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                     |
    /// |--------------------|-----------------------------|
    /// | `EFFIGY_API_URL`   | `http://localhost:8000/api` |
    /// | `EFFIGY_API_TOKEN` | unset (no auth header)      |
    pub fn from_env() -> Self {
        let api_url = std::env::var("EFFIGY_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".into());
        let token = std::env::var("EFFIGY_API_TOKEN").ok();

        Self { api_url, token }
    }
}
