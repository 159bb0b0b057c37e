//! Error types for the Synchro SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type SynchroResult<T> = Result<T, SynchroError>;

/// Error types that can occur when calling the transit API.
#[derive(Debug, thiserror::Error)]
pub enum SynchroError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response decoded as JSON but lacks the expected structure.
    #[error("Invalid response format from {endpoint} API. Response: {body}")]
    InvalidResponse { endpoint: String, body: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SynchroError {
    /// Create an API error from a status code and response body.
    ///
    /// The upstream reports failures as `{"message": "..."}`; that message is
    /// preferred over the generic status text when present.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        Self::Api { status, message }
    }

    /// Status code for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error body returned by the upstream API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
