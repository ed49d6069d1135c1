//! Error types for the ClickUp client.
//!
//! # Design
//! Errors are surfaced in the shape the transport produced them. A non-2xx
//! response keeps its status and raw body; nothing is retried or reclassified.
//! Route methods never add their own variants.

/// Errors returned by `Request` and every route method.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never completed: connection, TLS, timeout or body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    DeserializationError(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// The merged client options did not validate.
    #[error("invalid client options: {0}")]
    Config(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An identifier cannot stand as a path segment (empty, `.` or `..`).
    #[error("invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// The attachment file could not be opened.
    #[error("attachment I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 401,
            body: r#"{"err":"Token invalid","ECODE":"OAUTH_025"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"HTTP 401: {"err":"Token invalid","ECODE":"OAUTH_025"}"#
        );
    }

    #[test]
    fn config_error_display() {
        let err = ApiError::Config("responseType must be `json` or `text`".to_string());
        assert_eq!(
            err.to_string(),
            "invalid client options: responseType must be `json` or `text`"
        );
    }

    #[test]
    fn deserialization_error_wraps_serde() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::DeserializationError(source);
        assert!(err.to_string().starts_with("deserialization failed:"));
    }

    #[test]
    fn invalid_path_segment_display_quotes_the_id() {
        let err = ApiError::InvalidPathSegment("..".to_string());
        assert_eq!(err.to_string(), r#"invalid path segment: "..""#);
    }

    #[test]
    fn url_error_converts() {
        let err: ApiError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
