use thiserror::Error;

use crate::types::error_types::ErrorResponse;

/// A unified error type for the transport layer.
///
/// Route construction never fails; only sending requests does.
#[derive(Debug, Error)]
pub enum LibreChatError {
    /// HTTP request failed (network or protocol issue).
    #[error("Reqwest Error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// Non-2xx status with a parseable `{ "message": ... }` body.
    #[error("API Error: {}", .0.message)]
    ApiError(ErrorResponse),

    /// Non-2xx status whose body wasn't an [`ErrorResponse`].
    #[error("Non-success HTTP status {code}, body: {body}")]
    HttpStatus {
        code: u16,
        body: String,
    },

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Missing or invalid client configuration.
    #[error("Config error: {0}")]
    Config(String),

    // Other
    #[error("Other error: {0}")]
    Other(String),
}

/// Wrap a parsed error body.
pub fn handle_api_error(err: ErrorResponse) -> LibreChatError {
    LibreChatError::ApiError(err)
}
