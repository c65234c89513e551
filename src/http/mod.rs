//! HTTP transport: `ClassroomHttp`, the shared request utility every
//! sub-client delegates to.

pub mod client;
pub mod retry;

pub use client::{ClassroomHttp, HttpConfig, RequestOptions};
pub use retry::{RetryConfig, RetryPolicy};
