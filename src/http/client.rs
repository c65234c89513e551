//! Low-level HTTP client: `ClassroomHttp`.
//!
//! Owns the reqwest pool, base URL, default timeout and bearer token.
//! Sub-clients hand it a path, a verb, an optional payload and per-request
//! [`RequestOptions`]; it returns the deserialized response body untouched.

use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

use async_lock::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Construction parameters for [`ClassroomHttp`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    /// Applied to every request unless [`RequestOptions::timeout`] overrides it.
    pub timeout: Duration,
    pub headers: HeaderMap,
    pub auth_token: Option<String>,
    /// Policy consulted by `GET` requests only.
    pub get_retry: RetryPolicy,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: HeaderMap::new(),
            auth_token: None,
            get_retry: RetryPolicy::None,
        }
    }
}

/// Per-request knobs: query parameters and a timeout override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter. Values are URL-encoded when the URL is built.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn apply_query(&self, url: String) -> String {
        if self.query.is_empty() {
            return url;
        }
        let params: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", url, params.join("&"))
    }
}

/// Low-level HTTP client for the classroom REST API.
pub struct ClassroomHttp {
    base_url: String,
    client: Client,
    timeout: Duration,
    get_retry: RetryPolicy,
    /// Bearer token. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl ClassroomHttp {
    pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
        let mut headers = config.headers;
        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout: config.timeout,
            get_retry: config.get_retry,
            auth_token: Arc::new(RwLock::new(config.auth_token)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The client-wide default timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    pub(crate) async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    pub(crate) async fn has_auth_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::GET, path, None::<&()>, &options, &self.get_retry)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::POST, path, body, &options, &RetryPolicy::None)
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::PUT, path, body, &options, &RetryPolicy::None)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::DELETE, path, None::<&()>, &options, &RetryPolicy::None)
            .await
    }

    /// `POST` a multipart form. Forms are consumed on send, so never retried.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let url = options.apply_query(self.url(path));
        let req = self.prepare(Method::POST, &url, &options).await.multipart(form);
        self.execute(req, &Method::POST, &url, &options).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
        retry: &RetryPolicy,
    ) -> Result<T, HttpError> {
        let url = options.apply_query(self.url(path));
        let Some(config) = retry.config() else {
            return self.do_request(&method, &url, body, options).await;
        };

        let mut attempt = 0;
        loop {
            let err = match self.do_request::<T, B>(&method, &url, body, options).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            let (should_retry, server_delay) = match &err {
                HttpError::ServerError { status, .. } => (config.is_retryable_status(*status), None),
                HttpError::RateLimited { retry_after_ms } => (
                    config.is_retryable_status(429),
                    retry_after_ms.map(Duration::from_millis),
                ),
                HttpError::Timeout => (true, None),
                HttpError::Reqwest(re) => (re.is_connect() || re.is_timeout() || re.is_request(), None),
                _ => (false, None),
            };

            if !should_retry || config.max_retries == 0 {
                return Err(err);
            }
            if attempt >= config.max_retries {
                return Err(HttpError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    last_error: err.to_string(),
                });
            }

            let delay = config.next_delay(attempt, server_delay);
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Retrying request to {}",
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, HttpError> {
        let mut req = self.prepare(method.clone(), url, options).await;
        if let Some(b) = body {
            req = req.json(b);
        }
        self.execute(req, method, url, options).await
    }

    async fn prepare(&self, method: Method, url: &str, options: &RequestOptions) -> RequestBuilder {
        let mut req = self.client.request(method, url);
        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(timeout) = options.timeout {
            req = req.timeout(timeout);
        }
        req
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        method: &Method,
        url: &str,
        options: &RequestOptions,
    ) -> Result<T, HttpError> {
        let timeout = options.timeout.unwrap_or(self.timeout);
        tracing::debug!(
            method = %method,
            url,
            timeout_ms = timeout.as_millis() as u64,
            "Sending request"
        );

        let resp = req.send().await.map_err(HttpError::from_transport)?;
        let status = resp.status();

        if status.is_success() {
            return resp.json::<T>().await.map_err(HttpError::from_transport);
        }

        let retry_after_ms = retry_after_ms(resp.headers());

        let body_text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read error response body");
                String::new()
            }
        };

        tracing::warn!(status = status.as_u16(), method = %method, url, "Request failed");
        Err(HttpError::from_status(status.as_u16(), body_text, retry_after_ms))
    }
}

/// `Retry-After` in milliseconds. Only the delta-seconds form is understood;
/// values too large to express in milliseconds are ignored.
fn retry_after_ms(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .and_then(|secs| secs.checked_mul(1000))
}

impl Clone for ClassroomHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            timeout: self.timeout,
            get_retry: self.get_retry.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
