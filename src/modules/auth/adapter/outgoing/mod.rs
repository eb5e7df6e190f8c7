pub mod jwt;
pub mod reset_token_redis;
pub mod sea_orm_entity;
pub mod security;
pub mod smtp_reset_mailer;
pub mod token_blacklist_redis;
pub mod user_repository_postgres;
