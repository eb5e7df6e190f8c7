use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ForgotPasswordRequestDto {
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ForgotPasswordResponseBody {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequestDto,
    responses(
        (status = 200, description = "Reset mail queued when the address has an account"),
    )
)]
#[post("/api/auth/forgot-password")]
pub async fn forgot_password_handler(
    data: web::Data<AppState>,
    payload: web::Json<ForgotPasswordRequestDto>,
) -> impl Responder {
    // Succeeds either way; the response must not reveal whether the
    // address has an account.
    match data
        .request_password_reset_use_case
        .execute(&payload.email)
        .await
    {
        Ok(()) => ApiResponse::success(ForgotPasswordResponseBody {
            message: "If that address has an account, a reset link is on its way.".to_string(),
        }),
        Err(err) => {
            tracing::error!("password reset request failed: {err:?}");
            ApiResponse::internal_error()
        }
    }
}
