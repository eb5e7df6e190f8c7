use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The site owner. The system holds exactly one of these in practice; the
/// shape still carries full identity so tokens and password flows stay
/// conventional.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
