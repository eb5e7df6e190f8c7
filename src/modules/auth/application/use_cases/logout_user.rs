use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::auth::application::services::token_digest;

#[derive(Debug, Clone)]
pub enum LogoutError {
    InvalidToken,
    BlacklistError(String),
}

/// An interface for the logout use case.
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

pub struct LogoutUseCase {
    tokens: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl LogoutUseCase {
    pub fn new(tokens: Arc<dyn TokenProvider>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        let claims = self
            .tokens
            .verify_token(token)
            .map_err(|_| LogoutError::InvalidToken)?;

        // Blacklist only for as long as the token could still be replayed.
        let remaining = claims.exp - Utc::now().timestamp();
        if remaining <= 0 {
            return Ok(());
        }

        self.blacklist
            .blacklist(&token_digest::digest(token), remaining as u64)
            .await
            .map_err(LogoutError::BlacklistError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{TokenClaims, TokenError};
    use std::sync::Mutex;
    use uuid::Uuid;

    struct StubTokens {
        exp_offset: i64,
        valid: bool,
    }

    impl TokenProvider for StubTokens {
        fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            unimplemented!("not used in logout tests")
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            if !self.valid {
                return Err(TokenError::MalformedToken);
            }
            let now = Utc::now().timestamp();
            Ok(TokenClaims {
                sub: Uuid::new_v4(),
                exp: now + self.exp_offset,
                iat: now,
                nbf: now,
                token_type: "access".into(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingBlacklist {
        entries: Mutex<Vec<(String, u64)>>,
    }

    #[async_trait]
    impl TokenBlacklist for RecordingBlacklist {
        async fn blacklist(&self, digest: &str, ttl: u64) -> Result<(), String> {
            self.entries.lock().unwrap().push((digest.to_string(), ttl));
            Ok(())
        }

        async fn is_blacklisted(&self, digest: &str) -> Result<bool, String> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .any(|(d, _)| d == digest))
        }
    }

    #[tokio::test]
    async fn logout_blacklists_the_token_digest() {
        let blacklist = Arc::new(RecordingBlacklist::default());
        let uc = LogoutUseCase::new(
            Arc::new(StubTokens {
                exp_offset: 600,
                valid: true,
            }),
            blacklist.clone(),
        );

        uc.execute("session-token").await.unwrap();

        let expected = token_digest::digest("session-token");
        assert!(blacklist.is_blacklisted(&expected).await.unwrap());
        // Raw token never reaches the store.
        assert!(!blacklist.is_blacklisted("session-token").await.unwrap());
    }

    #[tokio::test]
    async fn already_expired_token_is_a_no_op() {
        let blacklist = Arc::new(RecordingBlacklist::default());
        let uc = LogoutUseCase::new(
            Arc::new(StubTokens {
                exp_offset: -10,
                valid: true,
            }),
            blacklist.clone(),
        );

        uc.execute("stale-token").await.unwrap();
        assert!(blacklist.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let uc = LogoutUseCase::new(
            Arc::new(StubTokens {
                exp_offset: 0,
                valid: false,
            }),
            Arc::new(RecordingBlacklist::default()),
        );

        let err = uc.execute("garbage").await.unwrap_err();
        assert!(matches!(err, LogoutError::InvalidToken));
    }
}
