pub mod password_policy;
pub mod token_digest;
