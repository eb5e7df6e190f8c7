use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{PasswordHasher, UserRepository};
use crate::auth::application::services::password_policy;

#[derive(Debug, Clone)]
pub enum ChangePasswordError {
    UserNotFound,
    /// Gets its own variant so the screen can say "Incorrect current
    /// password." instead of a generic failure.
    WrongCurrentPassword,
    WeakPassword(String),
    RepositoryError(String),
    HashError,
}

/// An interface for the change-password use case. Changing always
/// re-authenticates with the current password first.
#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ChangePasswordError>;
}

pub struct ChangePasswordUseCase {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ChangePasswordUseCase {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl IChangePasswordUseCase for ChangePasswordUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ChangePasswordError> {
        password_policy::check_new_password(new_password)
            .map_err(ChangePasswordError::WeakPassword)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(ChangePasswordError::RepositoryError)?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .hasher
            .verify_password(current_password, &user.password_hash)
            .await
            .map_err(|_| ChangePasswordError::HashError)?;
        if !matches {
            return Err(ChangePasswordError::WrongCurrentPassword);
        }

        let new_hash = self
            .hasher
            .hash_password(new_password)
            .await
            .map_err(|_| ChangePasswordError::HashError)?;

        self.users
            .update_password(user.id, &new_hash)
            .await
            .map_err(ChangePasswordError::RepositoryError)
    }
}
