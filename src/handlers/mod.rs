pub mod contact_handlers;
pub mod content_handlers;
pub mod health;

use actix_web::{
    HttpRequest, HttpResponse,
    dev::ServiceResponse,
    error::JsonPayloadError,
    http::{StatusCode, header},
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    web,
};

use crate::api_structs::ApiErrorResponse;
use crate::errors::AppError;

/// Turn body decode failures into the JSON error shape. Broken connections
/// are server-side faults, everything else is the client's.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Payload(e) => AppError::Unhandled(e.to_string()),
        other => AppError::BadRequest(other.to_string()),
    }
    .into()
}

/// Message for an error response that did not come from `AppError`.
fn fallback_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => "Request body too large",
        StatusCode::NOT_FOUND => "Route not found",
        s if s.is_client_error() => "Invalid request body",
        _ => "Something went wrong!",
    }
}

/// Rewrite error responses produced outside our handlers (extractor limits,
/// framework faults) into `{"error": ...}`. JSON responses pass through.
fn json_fallback<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    if let Some(err) = res.response().error() {
        if status.is_server_error() {
            log::error!("Unhandled error: {err}");
        } else {
            log::debug!("Rejected request: {err}");
        }
    }

    let (req, _) = res.into_parts();
    let resp = HttpResponse::build(status).json(ApiErrorResponse::new(fallback_message(status)));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, resp).map_into_right_body(),
    ))
}

/// Fallback for any unmatched method or path.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiErrorResponse::new("Route not found"))
}

/// Configure all routes. Shared by the server and the integration tests;
/// the caller registers `web::Data<Catalog>` and `web::Data<ContactStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/", web::get().to(health::index))
        .service(
            web::scope("/api")
                .wrap(ErrorHandlers::new().default_handler(json_fallback))
                .route("/slides", web::get().to(content_handlers::list_slides))
                .route("/slides/{id}", web::get().to(content_handlers::read_slide))
                .route("/features", web::get().to(content_handlers::list_features))
                .route("/pricing", web::get().to(content_handlers::list_pricing))
                .route("/contact", web::post().to(contact_handlers::submit))
                .route("/contact/{id}", web::get().to(contact_handlers::read))
                .route("/contacts", web::get().to(contact_handlers::list))
                .route("/health", web::get().to(health::health)),
        )
        .default_service(web::to(not_found));
}
