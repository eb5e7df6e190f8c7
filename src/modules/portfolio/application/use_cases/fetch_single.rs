use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::portfolio::application::services::single_editor::SingleEditor;
use crate::portfolio::domain::entities::{
    About, Contact, Footer, Profile, Settings, SingleEntity, SingleKind, SingleRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchSingleError {
    #[error("document store failed: {0}")]
    Store(#[from] DocumentStoreError),
}

/// An interface for loading one single-document section. A section that was
/// never saved comes back as its all-default form.
#[async_trait]
pub trait IFetchSingleUseCase: Send + Sync {
    async fn execute(&self, kind: SingleKind) -> Result<SingleRecord, FetchSingleError>;
}

pub struct FetchSingleUseCase {
    store: Arc<dyn DocumentStore>,
}

impl FetchSingleUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn load_section<S, F>(&self, wrap: F) -> Result<SingleRecord, FetchSingleError>
    where
        S: SingleEntity,
        F: Fn(S) -> SingleRecord + Send,
    {
        let mut editor = SingleEditor::<S>::new();
        editor.load(self.store.as_ref()).await?;
        Ok(wrap(editor.into_record()))
    }
}

#[async_trait]
impl IFetchSingleUseCase for FetchSingleUseCase {
    async fn execute(&self, kind: SingleKind) -> Result<SingleRecord, FetchSingleError> {
        match kind {
            SingleKind::Profile => self.load_section::<Profile, _>(SingleRecord::Profile).await,
            SingleKind::About => self.load_section::<About, _>(SingleRecord::About).await,
            SingleKind::Contact => self.load_section::<Contact, _>(SingleRecord::Contact).await,
            SingleKind::Footer => self.load_section::<Footer, _>(SingleRecord::Footer).await,
            SingleKind::Settings => {
                self.load_section::<Settings, _>(SingleRecord::Settings).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::InMemoryDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn absent_section_loads_as_defaults() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let uc = FetchSingleUseCase::new(store);

        let record = uc.execute(SingleKind::Profile).await.unwrap();
        match record {
            SingleRecord::Profile(profile) => assert_eq!(profile, Profile::default()),
            other => panic!("expected a profile, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn stored_fields_load_from_document_root() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store.seed(
            "portfolio",
            "footer",
            json!({ "copyright": "© 2025 Jane Doe", "developedBy": "Jane" }),
        );
        let uc = FetchSingleUseCase::new(store);

        let record = uc.execute(SingleKind::Footer).await.unwrap();
        match record {
            SingleRecord::Footer(footer) => {
                assert_eq!(footer.copyright, "© 2025 Jane Doe");
                assert_eq!(footer.developed_by, "Jane");
            }
            other => panic!("expected a footer, got {other:?}"),
        }
    }
}
