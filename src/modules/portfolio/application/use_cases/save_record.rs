use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::media::application::domain::image::ImageUpload;
use crate::media::application::ports::outgoing::blob_store::{BlobStore, BlobStoreError};
use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::portfolio::application::services::list_editor::{ListEditor, SubmitError};
use crate::portfolio::domain::entities::{
    Achievement, Certificate, Education, Experience, ListEntity, ListKind, ListRecord, Project,
    Skill, SocialWork,
};
use crate::portfolio::domain::validate::ValidationError;

/// A create (no `record_id`) or an edit (with one) against a list section.
/// `fields` carries the draft exactly as the form produced it; identity is
/// never taken from the client.
#[derive(Debug, Clone)]
pub struct SaveRecordCommand {
    pub kind: ListKind,
    pub record_id: Option<String>,
    pub fields: Value,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveRecordError {
    #[error("draft payload malformed: {0}")]
    MalformedDraft(String),
    #[error("record not found")]
    RecordNotFound,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("image upload failed: {0}")]
    Upload(BlobStoreError),
    #[error("document write failed: {0}")]
    Store(DocumentStoreError),
}

/// An interface for the save-record use case.
#[async_trait]
pub trait ISaveRecordUseCase: Send + Sync {
    async fn execute(&self, command: SaveRecordCommand) -> Result<ListRecord, SaveRecordError>;
}

pub struct SaveRecordUseCase {
    store: Arc<dyn DocumentStore>,
    blobs: Arc<dyn BlobStore>,
}

impl SaveRecordUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { store, blobs }
    }

    async fn save_section<R, F>(
        &self,
        command: SaveRecordCommand,
        wrap: F,
    ) -> Result<ListRecord, SaveRecordError>
    where
        R: ListEntity,
        F: Fn(R) -> ListRecord + Send,
    {
        let draft: R = serde_json::from_value(command.fields)
            .map_err(|e| SaveRecordError::MalformedDraft(e.to_string()))?;

        let mut editor = ListEditor::<R>::new();
        editor
            .load(self.store.as_ref())
            .await
            .map_err(SaveRecordError::Store)?;

        match command.record_id.as_deref() {
            // Unknown ids make begin_edit no-op; the submit below then
            // reports NothingToSubmit, which surfaces as RecordNotFound.
            Some(id) => editor.begin_edit(id),
            None => editor.begin_create(),
        }

        let now = Utc::now();
        editor.bind_draft(draft, now.date_naive());

        let saved = editor
            .submit(self.store.as_ref(), self.blobs.as_ref(), command.image, now)
            .await
            .map_err(|e| match e {
                SubmitError::NothingToSubmit => SaveRecordError::RecordNotFound,
                SubmitError::Invalid(v) => SaveRecordError::Invalid(v),
                SubmitError::Upload(u) => SaveRecordError::Upload(u),
                SubmitError::Store(s) => SaveRecordError::Store(s),
            })?;

        Ok(wrap(saved))
    }
}

#[async_trait]
impl ISaveRecordUseCase for SaveRecordUseCase {
    async fn execute(&self, command: SaveRecordCommand) -> Result<ListRecord, SaveRecordError> {
        match command.kind {
            ListKind::Projects => {
                self.save_section::<Project, _>(command, ListRecord::Project)
                    .await
            }
            ListKind::Certificates => {
                self.save_section::<Certificate, _>(command, ListRecord::Certificate)
                    .await
            }
            ListKind::Achievements => {
                self.save_section::<Achievement, _>(command, ListRecord::Achievement)
                    .await
            }
            ListKind::Skills => {
                self.save_section::<Skill, _>(command, ListRecord::Skill)
                    .await
            }
            ListKind::Educations => {
                self.save_section::<Education, _>(command, ListRecord::Education)
                    .await
            }
            ListKind::Experiences => {
                self.save_section::<Experience, _>(command, ListRecord::Experience)
                    .await
            }
            ListKind::SocialWorks => {
                self.save_section::<SocialWork, _>(command, ListRecord::SocialWork)
                    .await
            }
        }
    }
}
