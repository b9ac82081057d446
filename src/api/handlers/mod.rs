//! HTTP handlers.

mod projects;
mod system;

#[cfg(test)]
mod system_test;

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use projects::*;
pub use system::*;

/// Error response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "failed to fetch projects")]
    pub error: String,
}

/// Error half of every handler result.
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
