use async_trait::async_trait;
use uuid::Uuid;

/// One-shot password-reset tokens, stored by digest with a TTL. `take`
/// consumes the token: a second redemption finds nothing.
#[async_trait]
pub trait ResetTokenRepository: Send + Sync {
    async fn store(
        &self,
        token_digest: &str,
        user_id: Uuid,
        ttl_seconds: u64,
    ) -> Result<(), String>;
    async fn take(&self, token_digest: &str) -> Result<Option<Uuid>, String>;
}
