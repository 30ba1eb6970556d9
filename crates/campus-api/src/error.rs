//! API error taxonomy.

use serde::Deserialize;
use thiserror::Error;

/// Fallback when a failure response carries no usable message.
const GENERIC_SERVER_MESSAGE: &str = "An error occurred.";

/// Error type for API operations.
///
/// The `Display` output of each variant is the exact message surfaced to the
/// user, so contexts can store `err.to_string()` directly.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No token in storage; the request was never sent
    #[error("No token available. Please log in.")]
    MissingToken,

    /// Request sent, no response received
    #[error("No response from the server.")]
    Network(#[source] reqwest::Error),

    /// Response received with a non-2xx status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Local input validation failed; the request was never sent
    #[error("{0}")]
    Validation(String),

    /// Response body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether this is an authentication failure the caller should treat as
    /// a dead session (token invalid or expired).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status: 401 | 403, .. })
    }
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

/// Structured failure body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Normalize a non-2xx response into an [`ApiError::Server`].
///
/// The server-supplied `{message}` is surfaced verbatim when present;
/// anything else falls back to a generic message.
pub fn error_from_parts(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string());

    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = error_from_parts(500, r#"{"message": "DB down"}"#);
        assert_eq!(err.to_string(), "DB down");
        match err {
            ApiError::Server { status, .. } => assert_eq!(status, 500),
            other => panic!("expected Server error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_falls_back_to_generic_message() {
        let err = error_from_parts(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "An error occurred.");
    }

    #[test]
    fn empty_message_falls_back_to_generic_message() {
        let err = error_from_parts(400, r#"{"message": ""}"#);
        assert_eq!(err.to_string(), "An error occurred.");
    }

    #[test]
    fn missing_token_message_matches_contract() {
        assert_eq!(
            ApiError::MissingToken.to_string(),
            "No token available. Please log in."
        );
    }

    #[test]
    fn unauthorized_statuses_are_flagged() {
        assert!(error_from_parts(401, "{}").is_unauthorized());
        assert!(error_from_parts(403, "{}").is_unauthorized());
        assert!(!error_from_parts(500, "{}").is_unauthorized());
        assert!(!ApiError::MissingToken.is_unauthorized());
    }
}
