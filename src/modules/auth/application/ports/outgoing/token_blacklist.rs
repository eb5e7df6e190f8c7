use async_trait::async_trait;

/// Revoked-session store. Keys are token digests, never raw tokens, and
/// entries expire with the token itself.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn blacklist(&self, token_digest: &str, ttl_seconds: u64) -> Result<(), String>;
    async fn is_blacklisted(&self, token_digest: &str) -> Result<bool, String>;
}
