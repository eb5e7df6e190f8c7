use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};

#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub access_token: String,
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidEmail,
    /// Unknown address and wrong password collapse into one error so the
    /// login form never reveals which half was wrong.
    InvalidCredentials,
    RepositoryError(String),
    TokenError(String),
}

/// An interface for the login use case.
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginSuccess, LoginError>;
}

pub struct LoginUserUseCase {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginUserUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginSuccess, LoginError> {
        if !EmailAddress::is_valid(email) {
            return Err(LoginError::InvalidEmail);
        }

        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(LoginError::RepositoryError)?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|_| LoginError::InvalidCredentials)?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(user.id)
            .map_err(|e| LoginError::TokenError(format!("{e:?}")))?;

        Ok(LoginSuccess {
            access_token,
            user_id: user.id,
            email: user.email,
        })
    }
}
