use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{PasswordHasher, UserRepository};

/// Creates the owner account on first boot. There is no registration
/// surface anywhere else: the single admin comes from configuration.
pub struct AdminBootstrap {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AdminBootstrap {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Returns `true` when an account was created, `false` when one already
    /// existed.
    pub async fn ensure(&self, email: &str, password: &str) -> Result<bool, String> {
        if self.users.count().await? > 0 {
            return Ok(false);
        }

        let now = Utc::now();
        let password_hash = self
            .hasher
            .hash_password(password)
            .await
            .map_err(|e| format!("failed to hash admin password: {e:?}"))?;

        self.users
            .insert(User {
                id: Uuid::new_v4(),
                email: email.to_string(),
                password_hash,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!("admin account created for {email}");
        Ok(true)
    }
}
