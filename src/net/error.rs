//! Failure taxonomy for calls to the extraction service.
//!
//! Callers need to tell one thing apart reliably: a credential rejection
//! (which invalidates the session) versus everything else (which must
//! not). The rest of the classification exists so pages can choose
//! between an inline field error and a generic retry banner.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Classified failure from the extraction service.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Credential missing, expired, or invalid (HTTP 401).
    #[error("not authorized")]
    Unauthorized,
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The service rejected the request itself (4xx other than 401).
    #[error("{detail}")]
    Validation { status: u16, detail: String },
    /// The service failed (5xx).
    #[error("server error (status {status})")]
    Server { status: u16 },
    /// The response arrived but its body was not what the schema promises.
    #[error("unexpected response from server")]
    Decode,
}

impl ApiError {
    /// Classify a non-success HTTP status, pulling the human-readable
    /// message out of the service's `{"detail": ...}` body when present.
    pub fn from_status(status: u16, body: Option<&str>) -> Self {
        match status {
            401 => Self::Unauthorized,
            400..=499 => Self::Validation {
                status,
                detail: body
                    .and_then(detail_message)
                    .unwrap_or_else(|| format!("request rejected (status {status})")),
            },
            _ => Self::Server { status },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Extract `detail` from a FastAPI-style error body. The field is a string
/// for domain errors and a list of objects for request-validation errors;
/// only the string form is worth surfacing verbatim.
fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
