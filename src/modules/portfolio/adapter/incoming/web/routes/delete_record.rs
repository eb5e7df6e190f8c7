use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    auth::adapter::incoming::web::extractors::AdminSession,
    portfolio::application::use_cases::delete_record::DeleteRecordError,
    portfolio::domain::entities::ListKind, shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ConfirmQuery {
    /// Must be `true`; deletion is always explicitly confirmed.
    pub confirm: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponseBody {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/api/admin/records/{kind}/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(
        ("kind" = String, Path, description = "Section slug, e.g. projects"),
        ("id" = String, Path, description = "Record id"),
        ConfirmQuery,
    ),
    responses(
        (status = 200, description = "Record removed (idempotent)"),
        (status = 400, description = "Confirmation missing"),
        (status = 404, description = "Unknown section"),
    )
)]
#[delete("/api/admin/records/{kind}/{id}")]
pub async fn delete_record_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<ConfirmQuery>,
) -> impl Responder {
    let (kind_slug, id) = path.into_inner();
    let Some(kind) = ListKind::from_slug(&kind_slug) else {
        return ApiResponse::not_found("UNKNOWN_SECTION", "No such portfolio section");
    };

    let confirmed = query.confirm.unwrap_or(false);

    match data
        .delete_record_use_case
        .execute(kind, id, confirmed)
        .await
    {
        Ok(()) => ApiResponse::success(DeleteResponseBody {
            message: "Deleted successfully!".to_string(),
        }),
        Err(DeleteRecordError::NotConfirmed) => ApiResponse::bad_request(
            "CONFIRMATION_REQUIRED",
            "Deletion must be explicitly confirmed",
        ),
        Err(DeleteRecordError::Store(_)) => ApiResponse::internal_error(),
    }
}
