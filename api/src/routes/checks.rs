use actix_web::{HttpResponse, Responder, get, post, web};
use payloads::{CheckId, requests::ChecksQuery};

use super::APIError;
use crate::store::CheckStore;

/// List check reports filtered, sorted, and paginated by the query
/// options. Absent options fall back to the listing defaults.
#[get("/vhc")]
pub async fn list_checks(
    query: web::Query<ChecksQuery>,
    store: web::Data<CheckStore>,
) -> impl Responder {
    tracing::debug!(?query, "listing checks");
    HttpResponse::Ok().json(store.query(&query))
}

/// Mark a report as opened.
#[post("/vhc/{check_id}/viewed")]
pub async fn mark_viewed(
    path: web::Path<CheckId>,
    store: web::Data<CheckStore>,
) -> Result<HttpResponse, APIError> {
    store.mark_viewed(*path)?;
    Ok(HttpResponse::Ok().finish())
}
