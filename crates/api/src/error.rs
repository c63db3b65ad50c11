//! Error types for site API requests.

use serde_json::Value;
use thiserror::Error;

/// Failure of a single API request.
///
/// Callers that only show a generic message can treat every variant the
/// same way; the variants exist so logs keep the real cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {message}")]
    Transport { message: String },

    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON response: {message}")]
    Decode { message: String },
}

impl FetchError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    /// HTTP status attached to the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `error` or `message` string of a JSON error body, in that order.
    pub fn server_message(&self) -> Option<String> {
        let FetchError::Status { body, .. } = self else {
            return None;
        };
        let parsed: Value = serde_json::from_str(body).ok()?;
        ["error", "message"]
            .iter()
            .find_map(|key| parsed.get(key).and_then(Value::as_str))
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(body: &str) -> FetchError {
        FetchError::Status {
            status: 400,
            body: body.into(),
        }
    }

    #[test]
    fn server_message_prefers_error_field() {
        assert_eq!(
            status(r#"{"message":"Bad","error":"Slug taken"}"#).server_message().as_deref(),
            Some("Slug taken")
        );
        assert_eq!(status(r#"{"message":"Bad"}"#).server_message().as_deref(), Some("Bad"));
    }

    #[test]
    fn server_message_is_none_without_json_text() {
        assert_eq!(status("<html>").server_message(), None);
        assert_eq!(status(r#"{"error":""}"#).server_message(), None);
        assert_eq!(FetchError::transport("reset").server_message(), None);
    }
}
