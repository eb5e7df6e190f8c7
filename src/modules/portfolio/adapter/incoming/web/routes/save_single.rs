use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::payloads::{ImagePayload, ImagePayloadError};
use crate::{
    auth::adapter::incoming::web::extractors::AdminSession,
    portfolio::application::use_cases::save_single::{SaveSingleCommand, SaveSingleError},
    portfolio::domain::entities::SingleKind,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveSingleRequest {
    #[serde(default)]
    pub data: serde_json::Value,
    pub image: Option<ImagePayload>,
}

#[utoipa::path(
    put,
    path = "/api/admin/content/{kind}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("kind" = String, Path, description = "Section slug, e.g. profile")),
    request_body = SaveSingleRequest,
    responses(
        (status = 200, description = "Section saved"),
        (status = 400, description = "Validation failure (first violated rule only)"),
        (status = 404, description = "Unknown section"),
        (status = 502, description = "Image upload failed; nothing was written"),
    )
)]
#[put("/api/admin/content/{kind}")]
pub async fn save_single_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<SaveSingleRequest>,
) -> impl Responder {
    let Some(kind) = SingleKind::from_slug(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_SECTION", "No such portfolio section");
    };

    let request = payload.into_inner();
    let image = match request.image.map(ImagePayload::decode).transpose() {
        Ok(image) => image,
        Err(ImagePayloadError::NotAnImage) => {
            return ApiResponse::bad_request("INVALID_IMAGE_TYPE", "Only image files are allowed");
        }
        Err(ImagePayloadError::BadEncoding) => {
            return ApiResponse::bad_request("INVALID_IMAGE_DATA", "Image data is not valid base64");
        }
    };

    let command = SaveSingleCommand {
        kind,
        fields: request.data,
        image,
    };

    match data.save_single_use_case.execute(command).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_save_single_error(err),
    }
}

fn map_save_single_error(err: SaveSingleError) -> actix_web::HttpResponse {
    match err {
        SaveSingleError::MalformedDraft(message) => {
            ApiResponse::bad_request("MALFORMED_DRAFT", &message)
        }
        SaveSingleError::Invalid(v) => ApiResponse::bad_request("VALIDATION_ERROR", &v.message),
        SaveSingleError::Upload(_) => {
            ApiResponse::bad_gateway("UPLOAD_FAILED", "Failed to save details. Try again.")
        }
        SaveSingleError::Store(_) => ApiResponse::internal_error(),
    }
}
