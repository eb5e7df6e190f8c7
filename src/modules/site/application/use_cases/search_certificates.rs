use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::document_store::DocumentStore;
use crate::portfolio::application::services::list_editor::ListEditor;
use crate::portfolio::domain::entities::Certificate;

/// An interface for the public all-certificates page. Same contract as the
/// projects page, filtering on the course name.
#[async_trait]
pub trait ISearchCertificatesUseCase: Send + Sync {
    async fn execute(&self, query: Option<String>) -> Vec<Certificate>;
}

pub struct SearchCertificatesUseCase {
    store: Arc<dyn DocumentStore>,
}

impl SearchCertificatesUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ISearchCertificatesUseCase for SearchCertificatesUseCase {
    async fn execute(&self, query: Option<String>) -> Vec<Certificate> {
        let mut editor = ListEditor::<Certificate>::new();
        if let Err(err) = editor.load(self.store.as_ref()).await {
            tracing::warn!("certificates page: failed to load certificates: {err}");
            return Vec::new();
        }

        let needle = query.unwrap_or_default().trim().to_lowercase();
        editor
            .into_items()
            .into_iter()
            .rev()
            .filter(|c| needle.is_empty() || c.course_name.to_lowercase().contains(&needle))
            .collect()
    }
}
