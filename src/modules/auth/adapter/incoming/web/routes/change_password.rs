use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::adapter::incoming::web::extractors::AdminSession,
    auth::application::use_cases::change_password::ChangePasswordError,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequestDto {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChangePasswordResponseBody {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequestDto,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Missing fields, mismatch, or wrong current password"),
    )
)]
#[post("/api/auth/change-password")]
pub async fn change_password_handler(
    session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<ChangePasswordRequestDto>,
) -> impl Responder {
    if payload.current_password.is_empty()
        || payload.new_password.is_empty()
        || payload.confirm_password.is_empty()
    {
        return ApiResponse::bad_request("MISSING_FIELDS", "All fields are required.");
    }
    if payload.new_password != payload.confirm_password {
        return ApiResponse::bad_request("PASSWORD_MISMATCH", "New passwords do not match.");
    }

    match data
        .change_password_use_case
        .execute(
            session.user_id,
            &payload.current_password,
            &payload.new_password,
        )
        .await
    {
        Ok(()) => ApiResponse::success(ChangePasswordResponseBody {
            message: "Password updated successfully!".to_string(),
        }),
        Err(err) => map_change_password_error(err),
    }
}

fn map_change_password_error(err: ChangePasswordError) -> actix_web::HttpResponse {
    match err {
        // The one case that deserves a precise message.
        ChangePasswordError::WrongCurrentPassword => {
            ApiResponse::bad_request("WRONG_CURRENT_PASSWORD", "Incorrect current password.")
        }
        ChangePasswordError::WeakPassword(message) => {
            ApiResponse::bad_request("WEAK_PASSWORD", &message)
        }
        // Everything else collapses into the generic failure the screen shows.
        ChangePasswordError::UserNotFound
        | ChangePasswordError::RepositoryError(_)
        | ChangePasswordError::HashError => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "CHANGE_PASSWORD_FAILED",
            "Failed to update password. Try again.",
        ),
    }
}
