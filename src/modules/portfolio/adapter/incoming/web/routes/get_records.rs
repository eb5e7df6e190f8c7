use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::AdminSession,
    portfolio::domain::entities::ListKind, shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/records/{kind}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("kind" = String, Path, description = "Section slug, e.g. projects")),
    responses(
        (status = 200, description = "The section's records (empty when never saved)"),
        (status = 404, description = "Unknown section"),
    )
)]
#[get("/api/admin/records/{kind}")]
pub async fn get_records_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Some(kind) = ListKind::from_slug(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_SECTION", "No such portfolio section");
    };

    match data.fetch_records_use_case.execute(kind).await {
        Ok(records) => ApiResponse::success(records),
        Err(err) => {
            tracing::error!("failed to fetch {kind:?}: {err}");
            ApiResponse::internal_error()
        }
    }
}
