//! Typed HTTP transport for the effigy API.
//!
//! Wraps [`reqwest`] with generic JSON request/response helpers and a
//! text-format escape hatch for endpoints that do not answer JSON. The
//! incarnation client layers its wire shapes on top; this module knows
//! nothing about them.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Authenticated HTTP transport for a single effigy backend.
///
/// Owns a connection-pooling [`reqwest::Client`], the API base URL, and
/// the static bearer token (when configured).
pub struct Transport {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl Transport {
    /// Create a transport with a fresh [`reqwest::Client`].
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a transport reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple backends).
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// API base URL this transport talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET` a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::parse_response(response).await
    }

    /// `POST` a JSON body and parse a JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT` a JSON body and parse a JSON response.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE` a resource whose success response is plain text, not
    /// JSON. The body is discarded.
    pub async fn delete_text(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Build a request for `path` relative to the base URL, attaching the
    /// bearer token when one is configured.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.api_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
