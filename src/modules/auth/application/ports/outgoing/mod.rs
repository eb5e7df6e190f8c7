pub mod password_hasher;
pub mod reset_mailer;
pub mod reset_token_repository;
pub mod token_blacklist;
pub mod token_provider;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use reset_mailer::ResetMailer;
pub use reset_token_repository::ResetTokenRepository;
pub use token_blacklist::TokenBlacklist;
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_repository::UserRepository;
