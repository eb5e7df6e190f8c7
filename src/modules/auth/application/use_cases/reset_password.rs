use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{
    PasswordHasher, ResetTokenRepository, UserRepository,
};
use crate::auth::application::services::{password_policy, token_digest};

#[derive(Debug, Clone)]
pub enum ResetPasswordError {
    InvalidOrExpiredToken,
    WeakPassword(String),
    RepositoryError(String),
    HashError,
}

/// An interface for redeeming a mailed reset token.
#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase {
    users: Arc<dyn UserRepository>,
    reset_tokens: Arc<dyn ResetTokenRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ResetPasswordUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        reset_tokens: Arc<dyn ResetTokenRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            reset_tokens,
            hasher,
        }
    }
}

#[async_trait]
impl IResetPasswordUseCase for ResetPasswordUseCase {
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError> {
        password_policy::check_new_password(new_password)
            .map_err(ResetPasswordError::WeakPassword)?;

        // `take` consumes the token: a replayed link lands here empty-handed.
        let user_id = self
            .reset_tokens
            .take(&token_digest::digest(token))
            .await
            .map_err(ResetPasswordError::RepositoryError)?
            .ok_or(ResetPasswordError::InvalidOrExpiredToken)?;

        let new_hash = self
            .hasher
            .hash_password(new_password)
            .await
            .map_err(|_| ResetPasswordError::HashError)?;

        self.users
            .update_password(user_id, &new_hash)
            .await
            .map_err(ResetPasswordError::RepositoryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::HashError;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct StubResetTokens {
        tokens: Mutex<HashMap<String, Uuid>>,
    }

    #[async_trait]
    impl ResetTokenRepository for StubResetTokens {
        async fn store(&self, digest: &str, user_id: Uuid, _ttl: u64) -> Result<(), String> {
            self.tokens
                .lock()
                .unwrap()
                .insert(digest.to_string(), user_id);
            Ok(())
        }

        async fn take(&self, digest: &str) -> Result<Option<Uuid>, String> {
            Ok(self.tokens.lock().unwrap().remove(digest))
        }
    }

    #[derive(Default)]
    struct RecordingUsers {
        updates: Mutex<Vec<(Uuid, String)>>,
    }

    #[async_trait]
    impl UserRepository for RecordingUsers {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn count(&self) -> Result<u64, String> {
            Ok(1)
        }

        async fn insert(&self, _user: User) -> Result<(), String> {
            unimplemented!("not used in reset tests")
        }

        async fn update_password(&self, id: Uuid, hash: &str) -> Result<(), String> {
            self.updates.lock().unwrap().push((id, hash.to_string()));
            Ok(())
        }
    }

    struct StubHasher;

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            unimplemented!("not used in reset tests")
        }
    }

    #[tokio::test]
    async fn valid_token_updates_the_password_once() {
        let user_id = Uuid::new_v4();
        let tokens = Arc::new(StubResetTokens::default());
        tokens
            .store(&token_digest::digest("mailed-token"), user_id, 60)
            .await
            .unwrap();
        let users = Arc::new(RecordingUsers::default());
        let uc = ResetPasswordUseCase::new(users.clone(), tokens.clone(), Arc::new(StubHasher));

        uc.execute("mailed-token", "brand-new-pass").await.unwrap();

        let updates = users.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0], (user_id, "hashed:brand-new-pass".into()));
        drop(updates);

        // Second redemption of the same link fails.
        let err = uc
            .execute("mailed-token", "brand-new-pass")
            .await
            .unwrap_err();
        assert!(matches!(err, ResetPasswordError::InvalidOrExpiredToken));
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let uc = ResetPasswordUseCase::new(
            Arc::new(RecordingUsers::default()),
            Arc::new(StubResetTokens::default()),
            Arc::new(StubHasher),
        );

        let err = uc.execute("never-issued", "brand-new-pass").await.unwrap_err();
        assert!(matches!(err, ResetPasswordError::InvalidOrExpiredToken));
    }

    #[tokio::test]
    async fn weak_password_fails_before_the_token_is_consumed() {
        let user_id = Uuid::new_v4();
        let tokens = Arc::new(StubResetTokens::default());
        tokens
            .store(&token_digest::digest("mailed-token"), user_id, 60)
            .await
            .unwrap();
        let uc = ResetPasswordUseCase::new(
            Arc::new(RecordingUsers::default()),
            tokens.clone(),
            Arc::new(StubHasher),
        );

        let err = uc.execute("mailed-token", "tiny").await.unwrap_err();
        assert!(matches!(err, ResetPasswordError::WeakPassword(_)));
        // The token survives for a proper retry.
        assert!(!tokens.tokens.lock().unwrap().is_empty());
    }
}
