use std::sync::Arc;

use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::ResetTokenRepository;

fn reset_key(token_digest: &str) -> String {
    format!("password_reset:{token_digest}")
}

#[derive(Clone)]
pub struct RedisResetTokenRepository {
    pool: Arc<Pool>,
}

impl RedisResetTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResetTokenRepository for RedisResetTokenRepository {
    async fn store(
        &self,
        token_digest: &str,
        user_id: Uuid,
        ttl_seconds: u64,
    ) -> Result<(), String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {e}"))?;

        let _: () = conn
            .set_ex(reset_key(token_digest), user_id.to_string(), ttl_seconds)
            .await
            .map_err(|e| format!("Failed to store reset token: {e}"))?;
        Ok(())
    }

    async fn take(&self, token_digest: &str) -> Result<Option<Uuid>, String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {e}"))?;

        // GETDEL makes redemption single-shot without a second round trip.
        let value: Option<String> = redis::cmd("GETDEL")
            .arg(reset_key(token_digest))
            .query_async(&mut conn)
            .await
            .map_err(|e| format!("Failed to redeem reset token: {e}"))?;

        match value {
            Some(raw) => raw
                .parse::<Uuid>()
                .map(Some)
                .map_err(|e| format!("Stored reset token is corrupt: {e}")),
            None => Ok(None),
        }
    }
}
