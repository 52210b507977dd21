use serde::{Deserialize, Serialize};

use crate::errors::FieldErrors;

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ApiErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ApiErrorResponse {
            error: error.into(),
            fields: None,
        }
    }
}

/// Contact form body. Every field is optional at the wire level so that a
/// missing field is reported as a validation error instead of a decode error.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to a successful contact submission.
#[derive(Serialize, Debug)]
pub struct ContactSubmitted {
    pub success: bool,
    pub message: &'static str,
    pub id: i64,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

#[derive(Serialize, Debug)]
pub struct StatusMessage {
    pub message: &'static str,
}
