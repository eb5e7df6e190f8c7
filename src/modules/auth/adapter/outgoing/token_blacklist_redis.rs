use std::sync::Arc;

use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::AsyncCommands;

use crate::auth::application::ports::outgoing::TokenBlacklist;

fn blacklist_key(token_digest: &str) -> String {
    format!("blacklisted_token:{token_digest}")
}

#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn blacklist(&self, token_digest: &str, ttl_seconds: u64) -> Result<(), String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {e}"))?;

        let _: () = conn
            .set_ex(blacklist_key(token_digest), "1", ttl_seconds)
            .await
            .map_err(|e| format!("Failed to blacklist token: {e}"))?;
        Ok(())
    }

    async fn is_blacklisted(&self, token_digest: &str) -> Result<bool, String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {e}"))?;

        conn.exists(blacklist_key(token_digest))
            .await
            .map_err(|e| format!("Failed to check token status: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_by_digest() {
        assert_eq!(blacklist_key("abc123"), "blacklisted_token:abc123");
    }
}
