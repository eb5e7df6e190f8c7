use std::sync::Arc;

use async_trait::async_trait;
use rand::RngCore;

use crate::auth::application::ports::outgoing::{
    ResetMailer, ResetTokenRepository, UserRepository,
};
use crate::auth::application::services::token_digest;

/// Reset tokens live this long before the link goes stale.
const RESET_TOKEN_TTL_SECONDS: u64 = 30 * 60;

#[derive(Debug, Clone)]
pub enum RequestPasswordResetError {
    RepositoryError(String),
    MailError(String),
}

/// An interface for the forgot-password use case. Succeeds whether or not
/// the address exists: the response never reveals which emails have an
/// account.
#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError>;
}

pub struct RequestPasswordResetUseCase {
    users: Arc<dyn UserRepository>,
    reset_tokens: Arc<dyn ResetTokenRepository>,
    mailer: Arc<dyn ResetMailer>,
    public_base_url: String,
}

impl RequestPasswordResetUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        reset_tokens: Arc<dyn ResetTokenRepository>,
        mailer: Arc<dyn ResetMailer>,
        public_base_url: String,
    ) -> Self {
        Self {
            users,
            reset_tokens,
            mailer,
            public_base_url,
        }
    }

    fn mint_token() -> String {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[async_trait]
impl IRequestPasswordResetUseCase for RequestPasswordResetUseCase {
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(RequestPasswordResetError::RepositoryError)?;

        let Some(user) = user else {
            tracing::debug!("password reset requested for unknown address");
            return Ok(());
        };

        let token = Self::mint_token();
        self.reset_tokens
            .store(
                &token_digest::digest(&token),
                user.id,
                RESET_TOKEN_TTL_SECONDS,
            )
            .await
            .map_err(RequestPasswordResetError::RepositoryError)?;

        let link = format!("{}/reset-password?token={token}", self.public_base_url);
        self.mailer
            .send_reset_link(&user.email, &link)
            .await
            .map_err(RequestPasswordResetError::MailError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct StubUsers {
        user: Option<User>,
    }

    #[async_trait]
    impl UserRepository for StubUsers {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, String> {
            Ok(self.user.clone())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, String> {
            Ok(self.user.clone())
        }

        async fn count(&self) -> Result<u64, String> {
            Ok(self.user.iter().count() as u64)
        }

        async fn insert(&self, _user: User) -> Result<(), String> {
            unimplemented!("not used in reset tests")
        }

        async fn update_password(&self, _id: Uuid, _hash: &str) -> Result<(), String> {
            unimplemented!("not used in reset tests")
        }
    }

    #[derive(Default)]
    struct RecordingResetTokens {
        stored: Mutex<Vec<(String, Uuid, u64)>>,
    }

    #[async_trait]
    impl ResetTokenRepository for RecordingResetTokens {
        async fn store(&self, digest: &str, user_id: Uuid, ttl: u64) -> Result<(), String> {
            self.stored
                .lock()
                .unwrap()
                .push((digest.to_string(), user_id, ttl));
            Ok(())
        }

        async fn take(&self, _digest: &str) -> Result<Option<Uuid>, String> {
            unimplemented!("not used in request tests")
        }
    }

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ResetMailer for RecordingMailer {
        async fn send_reset_link(&self, to: &str, link: &str) -> Result<(), String> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), link.to_string()));
            Ok(())
        }
    }

    fn owner() -> User {
        User {
            id: Uuid::new_v4(),
            email: "owner@example.com".into(),
            password_hash: "hash".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn known_address_gets_a_link_with_a_fresh_token() {
        let tokens = Arc::new(RecordingResetTokens::default());
        let mailer = Arc::new(RecordingMailer::default());
        let uc = RequestPasswordResetUseCase::new(
            Arc::new(StubUsers {
                user: Some(owner()),
            }),
            tokens.clone(),
            mailer.clone(),
            "https://portfolio.example".into(),
        );

        uc.execute("owner@example.com").await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (to, link) = &sent[0];
        assert_eq!(to, "owner@example.com");
        assert!(link.starts_with("https://portfolio.example/reset-password?token="));

        // The stored digest matches the mailed token.
        let token = link.split("token=").nth(1).unwrap();
        let stored = tokens.stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].0, token_digest::digest(token));
        assert_eq!(stored[0].2, RESET_TOKEN_TTL_SECONDS);
    }

    #[tokio::test]
    async fn unknown_address_succeeds_without_sending_anything() {
        let tokens = Arc::new(RecordingResetTokens::default());
        let mailer = Arc::new(RecordingMailer::default());
        let uc = RequestPasswordResetUseCase::new(
            Arc::new(StubUsers { user: None }),
            tokens.clone(),
            mailer.clone(),
            "https://portfolio.example".into(),
        );

        uc.execute("stranger@example.com").await.unwrap();
        assert!(mailer.sent.lock().unwrap().is_empty());
        assert!(tokens.stored.lock().unwrap().is_empty());
    }
}
