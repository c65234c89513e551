//! The backend's response envelope: `{ "code", "message", "data" }`.

use crate::error::SdkError;
use serde::{Deserialize, Serialize};

/// Envelope code the backend uses for success.
pub const SUCCESS_CODE: i32 = 200;

/// Response envelope wrapping every backend payload.
///
/// Returned as-is by every sub-client method. Use [`ApiResponse::into_data`]
/// to turn a failure code into an [`SdkError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub code: i32,
    #[serde(default, alias = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Envelope for endpoints that answer without a payload.
pub type EmptyResponse = ApiResponse<serde_json::Value>;

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Unwrap the payload, failing on a non-success code or absent data.
    pub fn into_data(self) -> Result<T, SdkError> {
        if !self.is_success() {
            return Err(self.into_error());
        }
        self.data.ok_or(SdkError::MissingData("response"))
    }

    /// Succeed on a success code and discard any payload.
    pub fn into_result(self) -> Result<(), SdkError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    fn into_error(self) -> SdkError {
        SdkError::Api {
            code: self.code,
            message: self
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        }
    }
}
