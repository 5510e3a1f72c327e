//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
///
/// Every non-success outcome of a remote call ends up here: transport
/// failures, non-2xx statuses and bodies that do not parse.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the request with a `{ "message": ... }` body
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The owning view was torn down before the request settled
    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// Classify a non-success response.
    ///
    /// A JSON body with a `message` wins over the status-derived variant so
    /// the operator sees the service's own wording.
    pub(crate) fn from_status(status: StatusCode, text: String) -> Self {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text)
            && let Some(message) = api_err.message.filter(|m| !m.is_empty())
        {
            return ClientError::Api {
                status: status.as_u16(),
                message,
            };
        }

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ if text.is_empty() => ClientError::Internal(status.to_string()),
            _ => ClientError::Internal(text),
        }
    }
}

/// Error body returned by the service
#[derive(serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Decode a success body. An empty body reads as JSON `null`.
pub(crate) fn decode_body<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    let trimmed = bytes.trim_ascii();
    let source: &[u8] = if trimmed.is_empty() { b"null" } else { trimmed };
    serde_json::from_slice(source)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_becomes_api_error() {
        let err = ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Invalid email or password"}"#.to_string(),
        );
        assert!(matches!(err, ClientError::Api { status: 401, .. }));
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_plain_body_falls_back_to_status() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, "no such route".to_string());
        assert!(matches!(err, ClientError::NotFound(ref t) if t == "no such route"));

        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, String::new());
        assert!(matches!(err, ClientError::Internal(_)));
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let value: serde_json::Value = decode_body(b"  ").unwrap();
        assert!(value.is_null());
        assert!(decode_body::<()>(b"").is_ok());
        assert!(decode_body::<u32>(b"not json").is_err());
    }
}
