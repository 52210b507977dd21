use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::collections::BTreeMap;
use std::fmt;

use crate::api_structs::ApiErrorResponse;

/// Per-field validation flags, serialized as `{"name": true, ...}` so a form can
/// highlight the offending inputs.
pub type FieldErrors = BTreeMap<&'static str, bool>;

#[derive(Debug)]
pub enum AppError {
    /// A submitted field was missing or malformed.
    InvalidInput {
        message: &'static str,
        fields: FieldErrors,
    },
    /// The request body could not be decoded at all.
    BadRequest(String),
    NotFound(&'static str),
    Storage(std::io::Error),
    Json(serde_json::Error),
    Unhandled(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput { message, .. } => write!(f, "Invalid input: {message}"),
            AppError::BadRequest(e) => write!(f, "Bad request: {e}"),
            AppError::NotFound(what) => write!(f, "{what} not found"),
            AppError::Storage(e) => write!(f, "Storage error: {e}"),
            AppError::Json(e) => write!(f, "JSON error: {e}"),
            AppError::Unhandled(e) => write!(f, "Unhandled error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Json(_) | AppError::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::InvalidInput { message, fields } => ApiErrorResponse {
                error: (*message).to_string(),
                fields: Some(fields.clone()),
            },
            AppError::BadRequest(detail) => {
                log::debug!("Rejected request body: {detail}");
                ApiErrorResponse::new("Invalid request body")
            }
            AppError::NotFound(what) => ApiErrorResponse::new(format!("{what} not found")),
            AppError::Storage(_) | AppError::Json(_) => {
                log::error!("{self}");
                ApiErrorResponse::new("Failed to process your message. Please try again.")
            }
            AppError::Unhandled(_) => {
                log::error!("{self}");
                ApiErrorResponse::new("Something went wrong!")
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
