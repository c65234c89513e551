//! High-level client: `ClassroomClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::class_summary::client::ClassSummaries;
use crate::domain::error_question::client::ErrorQuestions;
use crate::error::SdkError;
use crate::http::{ClassroomHttp, HttpConfig, RetryPolicy};
use crate::network::{API_TOKEN_ENV, API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::class_summary::client::ClassSummaries as ClassSummariesClient;
pub use crate::domain::error_question::client::ErrorQuestions as ErrorQuestionsClient;

/// The primary entry point for the classroom SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.class_summaries()`, `client.error_questions()`.
/// Clones share the connection pool and the auth token.
#[derive(Clone)]
pub struct ClassroomClient {
    pub(crate) http: ClassroomHttp,
}

impl ClassroomClient {
    pub fn builder() -> ClassroomClientBuilder {
        ClassroomClientBuilder::default()
    }

    /// Build a client from `CLASSROOM_API_URL` / `CLASSROOM_API_TOKEN`,
    /// falling back to the defaults when unset.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::builder();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.base_url(&url);
        }
        if let Ok(token) = std::env::var(API_TOKEN_ENV) {
            if !token.trim().is_empty() {
                builder = builder.auth_token(token.trim());
            }
        }
        builder.build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn class_summaries(&self) -> ClassSummaries<'_> {
        ClassSummaries { client: self }
    }

    pub fn error_questions(&self) -> ErrorQuestions<'_> {
        ErrorQuestions { client: self }
    }

    // ── Transport state ──────────────────────────────────────────────────

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Direct access to the transport, for endpoints this SDK does not wrap.
    pub fn http(&self) -> &ClassroomHttp {
        &self.http
    }

    /// Replace the bearer token sent with every request.
    pub async fn set_auth_token(&self, token: impl Into<String>) {
        self.http.set_auth_token(Some(token.into())).await;
    }

    pub async fn clear_auth_token(&self) {
        self.http.clear_auth_token().await;
    }

    pub async fn has_auth_token(&self) -> bool {
        self.http.has_auth_token().await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ClassroomClientBuilder {
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
    auth_token: Option<String>,
    retry: RetryPolicy,
}

impl Default for ClassroomClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
            auth_token: None,
            retry: RetryPolicy::None,
        }
    }
}

impl ClassroomClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Default timeout for requests that do not set their own.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Pre-set the bearer token on construction.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Retry policy for `GET` requests. Mutating requests are never retried.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn build(self) -> Result<ClassroomClient, SdkError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                SdkError::Validation(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                SdkError::Validation(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let http = ClassroomHttp::new(HttpConfig {
            base_url: self.base_url,
            timeout: self.timeout,
            headers,
            auth_token: self.auth_token,
            get_retry: self.retry,
        })?;

        Ok(ClassroomClient { http })
    }
}
