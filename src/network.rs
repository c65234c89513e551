//! Network constants for the classroom SDK.

use std::time::Duration;

/// Default REST API base URL (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default per-request timeout applied by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable read by `ClassroomClient::from_env` for the base URL.
pub const API_URL_ENV: &str = "CLASSROOM_API_URL";

/// Environment variable read by `ClassroomClient::from_env` for the bearer token.
pub const API_TOKEN_ENV: &str = "CLASSROOM_API_TOKEN";
