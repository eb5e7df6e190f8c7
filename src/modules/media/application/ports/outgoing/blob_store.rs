use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlobStoreError {
    #[error("upload rejected: {0}")]
    Rejected(String),
    #[error("blob storage unreachable: {0}")]
    Unreachable(String),
}

/// Write-once blob storage. Uploads return a publicly fetchable URL.
///
/// Nothing is ever deleted here: replacing a record's image leaves the old
/// blob behind. Accepted limitation, not a cleanup backlog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, BlobStoreError>;
}
