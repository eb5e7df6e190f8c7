use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::SuccessResponse, auth::application::use_cases::login_user::LoginError,
    shared::api::ApiResponse, AppState,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: LoginUserInfo,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserInfo {
    pub id: Uuid,
    pub email: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "email": "owner@example.com"
                    }
                }
            })
        ),
        (status = 400, description = "Malformed email"),
        (status = 401, description = "Invalid credentials"),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequestDto>,
) -> impl Responder {
    match data
        .login_user_use_case
        .execute(&payload.email, &payload.password)
        .await
    {
        Ok(success) => ApiResponse::success(LoginResponse {
            access_token: success.access_token,
            user: LoginUserInfo {
                id: success.user_id,
                email: success.email,
            },
        }),
        Err(err) => map_login_error(err),
    }
}

fn map_login_error(err: LoginError) -> actix_web::HttpResponse {
    match err {
        LoginError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Please enter a valid email address")
        }
        LoginError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Incorrect email or password")
        }
        LoginError::RepositoryError(_) | LoginError::TokenError(_) => {
            ApiResponse::internal_error()
        }
    }
}
