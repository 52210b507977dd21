use actix_web::HttpResponse;
use chrono::{SecondsFormat, Utc};

use crate::api_structs::{HealthResponse, StatusMessage};

/// GET /api/health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(StatusMessage {
        message: "Backend server is running!",
    })
}
