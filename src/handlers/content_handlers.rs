use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::models::content::Catalog;

/// GET /api/slides
pub async fn list_slides(catalog: web::Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.slides())
}

/// GET /api/slides/{id} - Non-numeric ids are simply not found.
pub async fn read_slide(
    catalog: web::Data<Catalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let slide = path
        .parse::<i64>()
        .ok()
        .and_then(|id| catalog.slide(id))
        .ok_or(AppError::NotFound("Slide"))?;
    Ok(HttpResponse::Ok().json(slide))
}

/// GET /api/features
pub async fn list_features(catalog: web::Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.features())
}

/// GET /api/pricing
pub async fn list_pricing(catalog: web::Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.pricing())
}
