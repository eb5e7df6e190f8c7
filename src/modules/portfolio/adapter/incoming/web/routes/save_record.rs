use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::payloads::{ImagePayload, ImagePayloadError};
use crate::{
    auth::adapter::incoming::web::extractors::AdminSession,
    portfolio::application::use_cases::save_record::{SaveRecordCommand, SaveRecordError},
    portfolio::domain::entities::ListKind,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecordRequest {
    /// Present when editing an existing record; omitted when creating.
    pub id: Option<String>,
    /// The draft's fields, exactly as the form holds them.
    #[serde(default)]
    pub data: serde_json::Value,
    pub image: Option<ImagePayload>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    put,
    path = "/api/admin/records/{kind}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("kind" = String, Path, description = "Section slug, e.g. projects")),
    request_body = SaveRecordRequest,
    responses(
        (status = 200, description = "Record updated"),
        (status = 201, description = "Record created"),
        (status = 400, description = "Validation failure (first violated rule only)"),
        (status = 404, description = "Unknown section or record id"),
        (status = 502, description = "Image upload failed; nothing was written"),
    )
)]
#[put("/api/admin/records/{kind}")]
pub async fn save_record_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<SaveRecordRequest>,
) -> impl Responder {
    let Some(kind) = ListKind::from_slug(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_SECTION", "No such portfolio section");
    };

    let request = payload.into_inner();
    let creating = request.id.is_none();

    let image = match request.image.map(ImagePayload::decode).transpose() {
        Ok(image) => image,
        Err(ImagePayloadError::NotAnImage) => {
            return ApiResponse::bad_request("INVALID_IMAGE_TYPE", "Only image files are allowed");
        }
        Err(ImagePayloadError::BadEncoding) => {
            return ApiResponse::bad_request("INVALID_IMAGE_DATA", "Image data is not valid base64");
        }
    };

    let command = SaveRecordCommand {
        kind,
        record_id: request.id,
        fields: request.data,
        image,
    };

    match data.save_record_use_case.execute(command).await {
        Ok(record) if creating => ApiResponse::created(record),
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_save_record_error(err),
    }
}

fn map_save_record_error(err: SaveRecordError) -> actix_web::HttpResponse {
    match err {
        SaveRecordError::MalformedDraft(message) => {
            ApiResponse::bad_request("MALFORMED_DRAFT", &message)
        }
        SaveRecordError::RecordNotFound => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "No record with that id")
        }
        SaveRecordError::Invalid(v) => ApiResponse::bad_request("VALIDATION_ERROR", &v.message),
        SaveRecordError::Upload(_) => {
            ApiResponse::bad_gateway("UPLOAD_FAILED", "Failed to save details. Try again.")
        }
        SaveRecordError::Store(_) => ApiResponse::internal_error(),
    }
}
