use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentStoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("stored document could not be encoded: {0}")]
    Encoding(String),
}

/// Two-level keyed document store: one document per portfolio section.
///
/// Writes replace the whole document. There is no compare-and-swap: two
/// admin sessions writing the same list race, and the last writer wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` means the document was never created. Callers render that
    /// as an empty list or an all-default form, never as an error.
    async fn get(&self, collection: &str, name: &str)
        -> Result<Option<Value>, DocumentStoreError>;

    async fn put(
        &self,
        collection: &str,
        name: &str,
        doc: Value,
    ) -> Result<(), DocumentStoreError>;
}
