//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The backend answered with a non-success envelope code.
    #[error("API error {code}: {message}")]
    Api { code: i32, message: String },

    /// A success envelope arrived without the `data` the caller asked for.
    #[error("Response for {0} carried no data")]
    MissingData(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Classify a transport failure, surfacing timeouts as [`HttpError::Timeout`].
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Reqwest(err)
        }
    }

    /// Map a non-success status code and its body text to an error.
    pub(crate) fn from_status(status: u16, body: String, retry_after_ms: Option<u64>) -> Self {
        match status {
            401 => HttpError::Unauthorized,
            403 => HttpError::Forbidden(body),
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited { retry_after_ms },
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            HttpError::from_status(401, String::new(), None),
            HttpError::Unauthorized
        ));
        assert!(matches!(
            HttpError::from_status(403, "nope".into(), None),
            HttpError::Forbidden(ref b) if b == "nope"
        ));
        assert!(matches!(
            HttpError::from_status(404, "missing".into(), None),
            HttpError::NotFound(_)
        ));
        assert!(matches!(
            HttpError::from_status(429, String::new(), Some(500)),
            HttpError::RateLimited { retry_after_ms: Some(500) }
        ));
        assert!(matches!(
            HttpError::from_status(422, String::new(), None),
            HttpError::BadRequest(_)
        ));
        assert!(matches!(
            HttpError::from_status(503, "down".into(), None),
            HttpError::ServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_sdk_error_display() {
        let err = SdkError::Api {
            code: 500,
            message: "课堂总结不存在".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: 课堂总结不存在");

        let err = SdkError::from(HttpError::Timeout);
        assert_eq!(err.to_string(), "HTTP error: Timeout");
    }
}
