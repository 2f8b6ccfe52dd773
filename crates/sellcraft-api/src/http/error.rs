//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sellcraft_core::service::ToolError;
use sellcraft_types::generation::GenerationError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Tool operation errors from the core services.
    Tool(ToolError),
    /// A generation round for this tool is already running.
    Busy(&'static str),
    /// Validation error.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<ToolError> for AppError {
    fn from(e: ToolError) -> Self {
        AppError::Tool(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut reauthentication_required = false;

        let (status, code, message) = match &self {
            AppError::Tool(err) => {
                reauthentication_required = err.requires_reauthentication();
                match err {
                    ToolError::EmptyInput => (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        err.to_string(),
                    ),
                    ToolError::CredentialMissing => (
                        StatusCode::UNAUTHORIZED,
                        "AUTH_REQUIRED",
                        "No API key available".to_string(),
                    ),
                    ToolError::UnknownIdea => (
                        StatusCode::NOT_FOUND,
                        "IDEA_NOT_FOUND",
                        "Idea not found".to_string(),
                    ),
                    ToolError::InvalidState(msg) => {
                        (StatusCode::CONFLICT, "INVALID_STATE", msg.clone())
                    }
                    ToolError::Generation(gen_err) if gen_err.invalidates_credential() => (
                        StatusCode::UNAUTHORIZED,
                        "AUTH_REQUIRED",
                        gen_err.to_string(),
                    ),
                    ToolError::Generation(GenerationError::QuotaExhausted(msg)) => (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_ERROR",
                        format!("quota exhausted: {msg}"),
                    ),
                    ToolError::Generation(gen_err) => {
                        (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", gen_err.to_string())
                    }
                    ToolError::Parse(parse_err) => {
                        (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", parse_err.to_string())
                    }
                }
            }
            AppError::Busy(tool) => (
                StatusCode::CONFLICT,
                "IN_FLIGHT",
                format!("a {tool} round is already running"),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let envelope = ApiResponse::error(code, &message, reauthentication_required);
        let mut response = envelope.into_response();
        *response.status_mut() = status;
        response
    }
}
