use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::AdminSession,
    portfolio::domain::entities::SingleKind, shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/content/{kind}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("kind" = String, Path, description = "Section slug, e.g. profile")),
    responses(
        (status = 200, description = "The section (all defaults when never saved)"),
        (status = 404, description = "Unknown section"),
    )
)]
#[get("/api/admin/content/{kind}")]
pub async fn get_single_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Some(kind) = SingleKind::from_slug(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_SECTION", "No such portfolio section");
    };

    match data.fetch_single_use_case.execute(kind).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => {
            tracing::error!("failed to fetch {kind:?}: {err}");
            ApiResponse::internal_error()
        }
    }
}
