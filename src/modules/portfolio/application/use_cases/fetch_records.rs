use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::portfolio::application::services::list_editor::ListEditor;
use crate::portfolio::domain::entities::{
    Achievement, Certificate, Education, Experience, ListEntity, ListKind, ListRecord, Project,
    Skill, SocialWork,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchRecordsError {
    #[error("document store failed: {0}")]
    Store(#[from] DocumentStoreError),
}

/// An interface for loading one section's full record list.
#[async_trait]
pub trait IFetchRecordsUseCase: Send + Sync {
    async fn execute(&self, kind: ListKind) -> Result<Vec<ListRecord>, FetchRecordsError>;
}

pub struct FetchRecordsUseCase {
    store: Arc<dyn DocumentStore>,
}

impl FetchRecordsUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn load_section<R, F>(&self, wrap: F) -> Result<Vec<ListRecord>, FetchRecordsError>
    where
        R: ListEntity,
        F: Fn(R) -> ListRecord + Send,
    {
        let mut editor = ListEditor::<R>::new();
        editor.load(self.store.as_ref()).await?;
        Ok(editor.into_items().into_iter().map(wrap).collect())
    }
}

#[async_trait]
impl IFetchRecordsUseCase for FetchRecordsUseCase {
    async fn execute(&self, kind: ListKind) -> Result<Vec<ListRecord>, FetchRecordsError> {
        match kind {
            ListKind::Projects => self.load_section::<Project, _>(ListRecord::Project).await,
            ListKind::Certificates => {
                self.load_section::<Certificate, _>(ListRecord::Certificate)
                    .await
            }
            ListKind::Achievements => {
                self.load_section::<Achievement, _>(ListRecord::Achievement)
                    .await
            }
            ListKind::Skills => self.load_section::<Skill, _>(ListRecord::Skill).await,
            ListKind::Educations => {
                self.load_section::<Education, _>(ListRecord::Education).await
            }
            ListKind::Experiences => {
                self.load_section::<Experience, _>(ListRecord::Experience)
                    .await
            }
            ListKind::SocialWorks => {
                self.load_section::<SocialWork, _>(ListRecord::SocialWork)
                    .await
            }
        }
    }
}
