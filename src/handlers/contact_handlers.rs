use actix_web::{Either, HttpRequest, HttpResponse, http::header, web};

use crate::api_structs::{ContactRequest, ContactSubmitted};
use crate::errors::AppError;
use crate::models::contact::ContactStore;
use crate::validate;

const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

type ContactBody = Either<web::Json<ContactRequest>, web::Form<ContactRequest>>;

/// A request with neither `Content-Length` nor `Transfer-Encoding`, or with a
/// zero length, carries no body.
fn has_no_body(req: &HttpRequest) -> bool {
    let headers = req.headers();
    match headers.get(header::CONTENT_LENGTH) {
        Some(len) => len.to_str().is_ok_and(|v| v.trim() == "0"),
        None => !headers.contains_key(header::TRANSFER_ENCODING),
    }
}

/// POST /api/contact - Accepts a JSON body or a urlencoded form. An empty
/// body is validated as a form with every field missing.
pub async fn submit(
    store: web::Data<ContactStore>,
    http_req: HttpRequest,
    body: Result<ContactBody, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let req = match body {
        Ok(Either::Left(json)) => json.into_inner(),
        Ok(Either::Right(form)) => form.into_inner(),
        Err(_) if has_no_body(&http_req) => ContactRequest::default(),
        Err(e) => return Err(e),
    };
    let contact = validate::validate_contact(req)?;
    let entry = store.submit(contact).await?;

    Ok(HttpResponse::Ok().json(ContactSubmitted {
        success: true,
        message: THANK_YOU,
        id: entry.id,
    }))
}

/// GET /api/contacts - Every stored submission, oldest first.
pub async fn list(store: web::Data<ContactStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.get_all().await)
}

/// GET /api/contact/{id}
pub async fn read(
    store: web::Data<ContactStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.parse::<i64>().map_err(|_| AppError::NotFound("Contact"))?;
    let entry = store
        .get_by_id(id)
        .await
        .ok_or(AppError::NotFound("Contact"))?;
    Ok(HttpResponse::Ok().json(entry))
}
