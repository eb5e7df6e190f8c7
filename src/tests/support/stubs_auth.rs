//! Auth collaborator stubs for handler tests.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    TokenBlacklist, TokenClaims, TokenError, TokenProvider,
};

/// Accepts any bearer token and resolves it to a fixed user.
#[derive(Clone)]
pub struct StaticTokenProvider {
    user_id: Uuid,
}

impl StaticTokenProvider {
    pub fn for_user(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        Ok("test-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.user_id,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}

/// A blacklist that never blocks anything.
pub struct AllowAllBlacklist;

#[async_trait]
impl TokenBlacklist for AllowAllBlacklist {
    async fn blacklist(&self, _token_digest: &str, _ttl_seconds: u64) -> Result<(), String> {
        Ok(())
    }

    async fn is_blacklisted(&self, _token_digest: &str) -> Result<bool, String> {
        Ok(false)
    }
}
