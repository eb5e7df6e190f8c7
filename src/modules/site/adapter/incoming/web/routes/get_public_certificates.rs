use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring over the course name.
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/public/certificates",
    tag = "public",
    params(SearchQuery),
    responses(
        (status = 200, description = "All certificates, newest first"),
    )
)]
#[get("/api/public/certificates")]
pub async fn get_public_certificates_handler(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let certificates = data
        .search_certificates_use_case
        .execute(query.into_inner().q)
        .await;
    ApiResponse::success(certificates)
}
