use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
    TaskFailed,
}

/// Hashing runs off the async executor (it is deliberately slow), hence the
/// async port even though the algorithm itself is synchronous.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
