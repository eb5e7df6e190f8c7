use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    EncodingError(String),
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    MalformedToken,
    InvalidTokenType(String),
}

/// Session tokens. The access-token lifetime doubles as the idle-session
/// window: no activity past it and the next request is simply unauthorized.
pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
