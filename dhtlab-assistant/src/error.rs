//! Error types for the assistant
//!
//! These stay inside the transport boundary: [`crate::ChatSession`] converts
//! every variant into a user-visible fallback reply instead of propagating.

use thiserror::Error;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Main error type for assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// No API key configured
    #[error("Missing API key: set {env_var}")]
    MissingApiKey { env_var: &'static str },

    /// HTTP transport failure (connect, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error: status {status}: {body}")]
    Api { status: u16, body: String },

    /// The service answered but produced no usable text
    #[error("Empty response from model")]
    EmptyResponse,

    /// The response body did not match the expected wire shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
