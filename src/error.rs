//! Unified SDK error types.

use serde::Deserialize;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Transport failures carry the transport's own description so callers can
/// surface it verbatim; non-2xx responses keep the raw body for reason
/// extraction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HttpError {
    #[error("{0}")]
    Transport(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited {
        retry_after_ms: Option<u64>,
        body: String,
    },

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// Raw body of the failed response, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            HttpError::Status { body, .. } | HttpError::RateLimited { body, .. } => {
                Some(body.as_str())
            }
            _ => None,
        }
    }

    /// The structured reason the backend gave for refusing the request.
    pub fn server_reason(&self) -> Option<String> {
        self.body().and_then(ErrorResponse::parse_reason)
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Timeout
        } else if e.is_decode() {
            HttpError::Decode(e.to_string())
        } else {
            HttpError::Transport(e.to_string())
        }
    }
}

/// Error body format returned by the backend on failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Parse a raw body and pick its reason, preferring `error` over `message`.
    pub fn parse_reason(body: &str) -> Option<String> {
        let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
        parsed
            .error
            .or(parsed.message)
            .filter(|reason| !reason.trim().is_empty())
    }
}
