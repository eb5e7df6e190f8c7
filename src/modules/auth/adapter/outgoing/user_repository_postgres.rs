use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use super::sea_orm_entity::user;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::UserRepository;

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map(|found| found.map(User::from))
            .map_err(|e| e.to_string())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String> {
        user::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map(|found| found.map(User::from))
            .map_err(|e| e.to_string())
    }

    async fn count(&self) -> Result<u64, String> {
        user::Entity::find()
            .count(self.db.as_ref())
            .await
            .map_err(|e| e.to_string())
    }

    async fn insert(&self, new_user: User) -> Result<(), String> {
        let row = user::ActiveModel {
            id: Set(new_user.id),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            created_at: Set(new_user.created_at.into()),
            updated_at: Set(new_user.updated_at.into()),
        };

        user::Entity::insert(row)
            .exec_without_returning(self.db.as_ref())
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), String> {
        let row = user::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_string()),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        user::Entity::update(row)
            .exec(self.db.as_ref())
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
