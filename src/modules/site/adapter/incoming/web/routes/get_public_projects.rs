use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring over the project name.
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/public/projects",
    tag = "public",
    params(SearchQuery),
    responses(
        (status = 200, description = "All projects, newest first"),
    )
)]
#[get("/api/public/projects")]
pub async fn get_public_projects_handler(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let projects = data
        .search_projects_use_case
        .execute(query.into_inner().q)
        .await;
    ApiResponse::success(projects)
}
