use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    auth::adapter::incoming::web::extractors::AdminSession,
    auth::application::use_cases::logout_user::LogoutError, shared::api::ApiResponse, AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponseBody {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session revoked"),
        (status = 401, description = "No valid session"),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_use_case.execute(&session.token).await {
        Ok(()) => ApiResponse::success(LogoutResponseBody {
            message: "Signed out".to_string(),
        }),
        Err(LogoutError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        Err(LogoutError::BlacklistError(_)) => ApiResponse::internal_error(),
    }
}
