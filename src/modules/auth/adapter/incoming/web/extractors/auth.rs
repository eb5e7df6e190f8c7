use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::auth::application::services::token_digest;
use crate::shared::api::ApiResponse;

/// An authenticated owner session. Admin routes take this extractor; the
/// token is kept so sign-out can revoke exactly the session that asked.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user_id: Uuid,
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    header
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let tokens = req
                .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
                .cloned()
                .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;
            let blacklist = req
                .app_data::<web::Data<Arc<dyn TokenBlacklist + Send + Sync>>>()
                .cloned()
                .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token = extract_token_from_header(&req).ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            let claims = tokens.verify_token(&token).map_err(|_| {
                create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))
            })?;

            if claims.token_type != "access" {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )));
            }

            let revoked = blacklist
                .is_blacklisted(&token_digest::digest(&token))
                .await
                .map_err(|_| create_api_error(ApiResponse::internal_error()))?;
            if revoked {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "SESSION_REVOKED",
                    "Session has been signed out",
                )));
            }

            Ok(AdminSession {
                user_id: claims.sub,
                token,
            })
        })
    }
}
