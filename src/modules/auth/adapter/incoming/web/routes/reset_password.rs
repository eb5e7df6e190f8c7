use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::application::use_cases::reset_password::ResetPasswordError, shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequestDto {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetPasswordResponseBody {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordRequestDto,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Invalid or expired token, or weak password"),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    data: web::Data<AppState>,
    payload: web::Json<ResetPasswordRequestDto>,
) -> impl Responder {
    match data
        .reset_password_use_case
        .execute(&payload.token, &payload.new_password)
        .await
    {
        Ok(()) => ApiResponse::success(ResetPasswordResponseBody {
            message: "Password updated successfully!".to_string(),
        }),
        Err(ResetPasswordError::InvalidOrExpiredToken) => ApiResponse::bad_request(
            "INVALID_RESET_TOKEN",
            "This reset link is invalid or has expired.",
        ),
        Err(ResetPasswordError::WeakPassword(message)) => {
            ApiResponse::bad_request("WEAK_PASSWORD", &message)
        }
        Err(ResetPasswordError::RepositoryError(_)) | Err(ResetPasswordError::HashError) => {
            ApiResponse::internal_error()
        }
    }
}
