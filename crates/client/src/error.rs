//! Error taxonomy of the client layer.
//!
//! Errors are propagated to the caller unchanged; this layer never
//! retries, logs, or swallows them. Absent optional wire fields are not
//! errors at all -- the translator defaults them.

/// Errors surfaced by incarnation operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required incarnation id was missing or empty. Raised before any
    /// request is issued; retrying without a valid id cannot succeed.
    #[error("no id provided")]
    MissingId,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("effigy API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Convenience alias for client operation results.
pub type ApiResult<T> = Result<T, ApiError>;
