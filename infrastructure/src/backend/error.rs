//! Error types for the HTTP backend adapter

use ragchat_application::BackendError;
use thiserror::Error;

/// Result type alias for HTTP adapter operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Longest error body kept for diagnostics
const MAX_ERROR_BODY: usize = 300;

/// Errors that can occur when talking to the backend over HTTP
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Parse { error: String, raw: String },

    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl HttpError {
    pub fn parse(error: serde_json::Error, raw: &str) -> Self {
        HttpError::Parse {
            error: error.to_string(),
            raw: ragchat_domain::util::truncate_str(raw, MAX_ERROR_BODY).to_string(),
        }
    }

    pub fn status(code: u16, body: &str) -> Self {
        HttpError::Status {
            code,
            body: ragchat_domain::util::truncate_str(body.trim(), MAX_ERROR_BODY).to_string(),
        }
    }
}

impl From<HttpError> for BackendError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Request(e) if e.is_timeout() => BackendError::Timeout,
            HttpError::Request(e) if e.is_connect() => BackendError::Connection(e.to_string()),
            HttpError::Request(e) if e.is_decode() => BackendError::Decode(e.to_string()),
            HttpError::Request(e) => BackendError::Other(e.to_string()),
            HttpError::Parse { error, .. } => BackendError::Decode(error),
            HttpError::Status { code, body } => BackendError::Status { code, body },
            HttpError::InvalidBaseUrl(url) => {
                BackendError::Other(format!("invalid base URL: {}", url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_backend_status() {
        let err: BackendError = HttpError::status(503, " Chatbot not initialized \n").into();
        assert_eq!(
            err,
            BackendError::Status {
                code: 503,
                body: "Chatbot not initialized".to_string()
            }
        );
    }

    #[test]
    fn test_parse_maps_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: BackendError = HttpError::parse(json_err, "not json").into();
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(1000);
        let HttpError::Status { body, .. } = HttpError::status(500, &body) else {
            panic!("expected status error");
        };
        assert_eq!(body.len(), MAX_ERROR_BODY);
    }
}
