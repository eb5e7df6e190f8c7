//! Generic editing state container for list-backed portfolio sections.
//!
//! Every list screen (projects, certificates, achievements, skills,
//! educations, experiences, social works) is this one state machine
//! instantiated with a different record type. The editor holds the loaded
//! items plus an optional draft, and persists the *whole list* as a single
//! document write. Concurrent sessions race and the last writer wins.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::application::domain::image::ImageUpload;
use crate::media::application::ports::outgoing::blob_store::{BlobStore, BlobStoreError};
use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::portfolio::domain::entities::{ListEntity, PORTFOLIO_COLLECTION};
use crate::portfolio::domain::validate::{ValidationContext, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStatus {
    Viewing,
    Editing,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// No draft is open: either nothing was started, or `begin_edit` was
    /// given an id that does not exist and no-opped.
    #[error("nothing to submit")]
    NothingToSubmit,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("image upload failed: {0}")]
    Upload(BlobStoreError),
    #[error("document write failed: {0}")]
    Store(DocumentStoreError),
}

#[derive(Debug, Error)]
pub enum RemoveError {
    #[error("deletion requires confirmation")]
    NotConfirmed,
    #[error("document write failed: {0}")]
    Store(DocumentStoreError),
}

/// Wire shape of a list document.
#[derive(Serialize, Deserialize)]
struct ListDocument<R> {
    #[serde(default = "Vec::new")]
    items: Vec<R>,
}

pub struct ListEditor<R: ListEntity> {
    status: EditorStatus,
    items: Vec<R>,
    draft: Option<R>,
    editing_id: Option<String>,
}

impl<R: ListEntity> Default for ListEditor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ListEntity> ListEditor<R> {
    pub fn new() -> Self {
        Self {
            status: EditorStatus::Viewing,
            items: Vec::new(),
            draft: None,
            editing_id: None,
        }
    }

    pub fn status(&self) -> EditorStatus {
        self.status
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn into_items(self) -> Vec<R> {
        self.items
    }

    pub fn draft(&self) -> Option<&R> {
        self.draft.as_ref()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    /// Fetches the section's list document. An absent document is an empty
    /// list, and an unreadable one degrades to empty as well; the screens
    /// never distinguish "missing" from "unreadable" on load.
    pub async fn load(&mut self, store: &dyn DocumentStore) -> Result<(), DocumentStoreError> {
        let doc = store
            .get(PORTFOLIO_COLLECTION, R::KIND.document_name())
            .await?;

        self.items = match doc {
            Some(value) => serde_json::from_value::<ListDocument<R>>(value)
                .map(|d| d.items)
                .unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(())
    }

    /// Opens a blank draft.
    pub fn begin_create(&mut self) {
        self.draft = Some(R::default());
        self.editing_id = None;
        self.status = EditorStatus::Editing;
    }

    /// Opens a draft pre-populated from an existing record. An unknown id
    /// is a silent no-op: the editor stays in `Viewing`.
    pub fn begin_edit(&mut self, id: &str) {
        let Some(existing) = self.items.iter().find(|r| r.id() == id) else {
            return;
        };
        self.draft = Some(existing.clone());
        self.editing_id = Some(id.to_string());
        self.status = EditorStatus::Editing;
    }

    /// Replaces the open draft's fields with freshly bound form state, then
    /// runs the one centralized derived-field recompute. Ignored while no
    /// draft is open.
    pub fn bind_draft(&mut self, mut draft: R, today: NaiveDate) {
        if self.status != EditorStatus::Editing {
            return;
        }
        draft.refresh_derived(today);
        self.draft = Some(draft);
    }

    /// Drops the draft and returns to `Viewing`.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.editing_id = None;
        self.status = EditorStatus::Viewing;
    }

    /// Validate → upload → persist, in that order. Validation failures make
    /// no remote call at all; an upload failure prevents the document write;
    /// a write failure leaves the editor (and its items) exactly as they
    /// were so the owner can retry.
    pub async fn submit(
        &mut self,
        store: &dyn DocumentStore,
        blobs: &dyn BlobStore,
        image: Option<ImageUpload>,
        now: DateTime<Utc>,
    ) -> Result<R, SubmitError> {
        let Some(draft) = self.draft.clone() else {
            return Err(SubmitError::NothingToSubmit);
        };
        let mut record = draft;

        let ctx = ValidationContext {
            has_image: image.is_some()
                || record.image_url().map_or(false, |url| !url.is_empty()),
            is_editing: self.editing_id.is_some(),
        };
        record.validate(&ctx)?;

        if let Some(upload) = image {
            let path = upload.storage_path(record.image_category(), now.timestamp_millis());
            if let Some(slot) = record.image_slot() {
                let url = blobs
                    .upload(&path, &upload.content_type, upload.bytes)
                    .await
                    .map_err(SubmitError::Upload)?;
                *slot = url;
            }
        }

        let editing_index = self
            .editing_id
            .as_deref()
            .and_then(|id| self.items.iter().position(|r| r.id() == id));

        match editing_index {
            Some(index) => {
                let existing = &self.items[index];
                record.assign_identity(existing.id().to_string(), existing.created_at());
            }
            None => {
                record.assign_identity(now.timestamp_millis().to_string(), Some(now));
            }
        }
        record.touch(now);
        record.refresh_derived(now.date_naive());

        let mut updated = self.items.clone();
        match editing_index {
            Some(index) => updated[index] = record.clone(),
            None => updated.push(record.clone()),
        }

        self.persist(store, updated)
            .await
            .map_err(SubmitError::Store)?;

        self.draft = None;
        self.editing_id = None;
        self.status = EditorStatus::Viewing;
        Ok(record)
    }

    /// Deletion needs an explicit confirmation from the owner. The filtered
    /// list is persisted wholesale, like every other write.
    pub async fn remove(
        &mut self,
        store: &dyn DocumentStore,
        id: &str,
        confirmed: bool,
    ) -> Result<(), RemoveError> {
        if !confirmed {
            return Err(RemoveError::NotConfirmed);
        }

        let filtered: Vec<R> = self
            .items
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();

        self.persist(store, filtered)
            .await
            .map_err(RemoveError::Store)
    }

    /// Writes `items` as the new list document and, only on success, makes
    /// it the editor's in-memory list.
    async fn persist(
        &mut self,
        store: &dyn DocumentStore,
        items: Vec<R>,
    ) -> Result<(), DocumentStoreError> {
        let doc = serde_json::to_value(ListDocument {
            items: items.clone(),
        })
        .map_err(|e| DocumentStoreError::Encoding(e.to_string()))?;

        store
            .put(PORTFOLIO_COLLECTION, R::KIND.document_name(), doc)
            .await?;

        self.items = items;
        Ok(())
    }
}
