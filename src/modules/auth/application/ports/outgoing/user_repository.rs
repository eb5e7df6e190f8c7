use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String>;
    async fn count(&self) -> Result<u64, String>;
    async fn insert(&self, user: User) -> Result<(), String>;
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), String>;
}
