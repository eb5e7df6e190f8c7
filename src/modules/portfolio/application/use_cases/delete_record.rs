use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::portfolio::application::services::list_editor::{ListEditor, RemoveError};
use crate::portfolio::domain::entities::{
    Achievement, Certificate, Education, Experience, ListEntity, ListKind, Project, Skill,
    SocialWork,
};

#[derive(Debug, thiserror::Error)]
pub enum DeleteRecordError {
    #[error("deletion requires confirmation")]
    NotConfirmed,
    #[error("document write failed: {0}")]
    Store(DocumentStoreError),
}

/// An interface for the delete-record use case.
#[async_trait]
pub trait IDeleteRecordUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: ListKind,
        id: String,
        confirmed: bool,
    ) -> Result<(), DeleteRecordError>;
}

pub struct DeleteRecordUseCase {
    store: Arc<dyn DocumentStore>,
}

impl DeleteRecordUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn delete_section<R: ListEntity>(
        &self,
        id: &str,
        confirmed: bool,
    ) -> Result<(), DeleteRecordError> {
        // The confirmation gate runs before any remote call.
        if !confirmed {
            return Err(DeleteRecordError::NotConfirmed);
        }

        let mut editor = ListEditor::<R>::new();
        editor
            .load(self.store.as_ref())
            .await
            .map_err(DeleteRecordError::Store)?;

        editor
            .remove(self.store.as_ref(), id, confirmed)
            .await
            .map_err(|e| match e {
                RemoveError::NotConfirmed => DeleteRecordError::NotConfirmed,
                RemoveError::Store(s) => DeleteRecordError::Store(s),
            })
    }
}

#[async_trait]
impl IDeleteRecordUseCase for DeleteRecordUseCase {
    async fn execute(
        &self,
        kind: ListKind,
        id: String,
        confirmed: bool,
    ) -> Result<(), DeleteRecordError> {
        match kind {
            ListKind::Projects => self.delete_section::<Project>(&id, confirmed).await,
            ListKind::Certificates => self.delete_section::<Certificate>(&id, confirmed).await,
            ListKind::Achievements => self.delete_section::<Achievement>(&id, confirmed).await,
            ListKind::Skills => self.delete_section::<Skill>(&id, confirmed).await,
            ListKind::Educations => self.delete_section::<Education>(&id, confirmed).await,
            ListKind::Experiences => self.delete_section::<Experience>(&id, confirmed).await,
            ListKind::SocialWorks => self.delete_section::<SocialWork>(&id, confirmed).await,
        }
    }
}
