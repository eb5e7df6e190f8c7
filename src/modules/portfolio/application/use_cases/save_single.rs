use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::media::application::domain::image::ImageUpload;
use crate::media::application::ports::outgoing::blob_store::{BlobStore, BlobStoreError};
use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::portfolio::application::services::single_editor::{SingleEditor, SingleSubmitError};
use crate::portfolio::domain::entities::{
    About, Contact, Footer, Profile, Settings, SingleEntity, SingleKind, SingleRecord,
};
use crate::portfolio::domain::validate::ValidationError;

#[derive(Debug, Clone)]
pub struct SaveSingleCommand {
    pub kind: SingleKind,
    pub fields: Value,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveSingleError {
    #[error("draft payload malformed: {0}")]
    MalformedDraft(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("image upload failed: {0}")]
    Upload(BlobStoreError),
    #[error("document write failed: {0}")]
    Store(DocumentStoreError),
}

/// An interface for the save-single-section use case.
#[async_trait]
pub trait ISaveSingleUseCase: Send + Sync {
    async fn execute(&self, command: SaveSingleCommand) -> Result<SingleRecord, SaveSingleError>;
}

pub struct SaveSingleUseCase {
    store: Arc<dyn DocumentStore>,
    blobs: Arc<dyn BlobStore>,
}

impl SaveSingleUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { store, blobs }
    }

    async fn save_section<S, F>(
        &self,
        command: SaveSingleCommand,
        wrap: F,
    ) -> Result<SingleRecord, SaveSingleError>
    where
        S: SingleEntity,
        F: Fn(S) -> SingleRecord + Send,
    {
        let draft: S = serde_json::from_value(command.fields)
            .map_err(|e| SaveSingleError::MalformedDraft(e.to_string()))?;

        let mut editor = SingleEditor::<S>::new();
        editor
            .load(self.store.as_ref())
            .await
            .map_err(SaveSingleError::Store)?;

        editor.bind_draft(draft);

        let saved = editor
            .submit(
                self.store.as_ref(),
                self.blobs.as_ref(),
                command.image,
                Utc::now(),
            )
            .await
            .map_err(|e| match e {
                SingleSubmitError::NothingToSubmit => {
                    SaveSingleError::MalformedDraft("no draft bound".into())
                }
                SingleSubmitError::Invalid(v) => SaveSingleError::Invalid(v),
                SingleSubmitError::Upload(u) => SaveSingleError::Upload(u),
                SingleSubmitError::Store(s) => SaveSingleError::Store(s),
            })?;

        Ok(wrap(saved))
    }
}

#[async_trait]
impl ISaveSingleUseCase for SaveSingleUseCase {
    async fn execute(&self, command: SaveSingleCommand) -> Result<SingleRecord, SaveSingleError> {
        match command.kind {
            SingleKind::Profile => {
                self.save_section::<Profile, _>(command, SingleRecord::Profile)
                    .await
            }
            SingleKind::About => {
                self.save_section::<About, _>(command, SingleRecord::About)
                    .await
            }
            SingleKind::Contact => {
                self.save_section::<Contact, _>(command, SingleRecord::Contact)
                    .await
            }
            SingleKind::Footer => {
                self.save_section::<Footer, _>(command, SingleRecord::Footer)
                    .await
            }
            SingleKind::Settings => {
                self.save_section::<Settings, _>(command, SingleRecord::Settings)
                    .await
            }
        }
    }
}
