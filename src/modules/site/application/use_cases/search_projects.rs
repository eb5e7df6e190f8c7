use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::document_store::DocumentStore;
use crate::portfolio::application::services::list_editor::ListEditor;
use crate::portfolio::domain::entities::Project;

/// An interface for the public all-projects page: every project newest-first,
/// optionally narrowed by a case-insensitive substring of the project name.
#[async_trait]
pub trait ISearchProjectsUseCase: Send + Sync {
    async fn execute(&self, query: Option<String>) -> Vec<Project>;
}

pub struct SearchProjectsUseCase {
    store: Arc<dyn DocumentStore>,
}

impl SearchProjectsUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ISearchProjectsUseCase for SearchProjectsUseCase {
    async fn execute(&self, query: Option<String>) -> Vec<Project> {
        let mut editor = ListEditor::<Project>::new();
        if let Err(err) = editor.load(self.store.as_ref()).await {
            tracing::warn!("projects page: failed to load projects: {err}");
            return Vec::new();
        }

        let needle = query.unwrap_or_default().trim().to_lowercase();
        editor
            .into_items()
            .into_iter()
            .rev()
            .filter(|p| needle.is_empty() || p.project_name.to_lowercase().contains(&needle))
            .collect()
    }
}
