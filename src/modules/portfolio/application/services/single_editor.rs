//! Editing state for the one-document sections (profile, about, contact,
//! footer, settings). Same load, validate, upload, write flow as the
//! list editor, minus the list and minus delete (none of these screens
//! expose one).

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::media::application::domain::image::ImageUpload;
use crate::media::application::ports::outgoing::blob_store::{BlobStore, BlobStoreError};
use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::portfolio::domain::entities::{SingleEntity, PORTFOLIO_COLLECTION};
use crate::portfolio::domain::validate::{ValidationContext, ValidationError};

#[derive(Debug, Error)]
pub enum SingleSubmitError {
    #[error("nothing to submit")]
    NothingToSubmit,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("image upload failed: {0}")]
    Upload(BlobStoreError),
    #[error("document write failed: {0}")]
    Store(DocumentStoreError),
}

pub struct SingleEditor<S: SingleEntity> {
    record: S,
    draft: Option<S>,
}

impl<S: SingleEntity> Default for SingleEditor<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SingleEntity> SingleEditor<S> {
    pub fn new() -> Self {
        Self {
            record: S::default(),
            draft: None,
        }
    }

    pub fn record(&self) -> &S {
        &self.record
    }

    pub fn into_record(self) -> S {
        self.record
    }

    /// An absent or unreadable document loads as the all-default form.
    pub async fn load(&mut self, store: &dyn DocumentStore) -> Result<(), DocumentStoreError> {
        let doc = store
            .get(PORTFOLIO_COLLECTION, S::KIND.document_name())
            .await?;

        self.record = match doc {
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => S::default(),
        };
        Ok(())
    }

    pub fn bind_draft(&mut self, draft: S) {
        self.draft = Some(draft);
    }

    pub async fn submit(
        &mut self,
        store: &dyn DocumentStore,
        blobs: &dyn BlobStore,
        image: Option<ImageUpload>,
        now: DateTime<Utc>,
    ) -> Result<S, SingleSubmitError> {
        let Some(mut record) = self.draft.clone() else {
            return Err(SingleSubmitError::NothingToSubmit);
        };

        let ctx = ValidationContext {
            has_image: image.is_some()
                || record.image_url().map_or(false, |url| !url.is_empty()),
            is_editing: true,
        };
        record.validate(&ctx)?;

        if let Some(upload) = image {
            let path = upload.storage_path(record.image_category(), now.timestamp_millis());
            if let Some(slot) = record.image_slot() {
                let url = blobs
                    .upload(&path, &upload.content_type, upload.bytes)
                    .await
                    .map_err(SingleSubmitError::Upload)?;
                *slot = url;
            }
        }

        record.touch(now);

        let doc = serde_json::to_value(&record)
            .map_err(|e| SingleSubmitError::Store(DocumentStoreError::Encoding(e.to_string())))?;
        store
            .put(PORTFOLIO_COLLECTION, S::KIND.document_name(), doc)
            .await
            .map_err(SingleSubmitError::Store)?;

        self.record = record.clone();
        self.draft = None;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::domain::entities::{Profile, Settings};
    use crate::tests::support::stubs::{FakeBlobStore, InMemoryDocumentStore};

    fn now() -> DateTime<Utc> {
        "2025-06-15T10:00:00Z".parse().unwrap()
    }

    fn profile_draft() -> Profile {
        Profile {
            name: "Jane Doe".into(),
            position: "Software Engineer".into(),
            start_note: "I build things".into(),
            github: "https://github.com/janedoe".into(),
            linkedin: "https://linkedin.com/in/janedoe".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn absent_document_loads_as_defaults() {
        let store = InMemoryDocumentStore::new();
        let mut editor = SingleEditor::<Settings>::new();
        editor.load(&store).await.unwrap();
        assert_eq!(editor.record(), &Settings::default());
    }

    #[tokio::test]
    async fn submit_writes_fields_at_document_root() {
        let store = InMemoryDocumentStore::new();
        let blobs = FakeBlobStore::new();
        let mut editor = SingleEditor::<Settings>::new();
        editor.load(&store).await.unwrap();

        editor.bind_draft(Settings {
            app_name: "My Portfolio".into(),
            ..Default::default()
        });
        let saved = editor.submit(&store, &blobs, None, now()).await.unwrap();
        assert_eq!(saved.updated_at, Some(now()));

        let doc = store.get_raw("portfolio", "settings").unwrap();
        assert_eq!(doc["appName"], "My Portfolio");
        // No `items` wrapper on single documents.
        assert!(doc.get("items").is_none());
    }

    #[tokio::test]
    async fn profile_upload_fills_photo_url_before_the_write() {
        let store = InMemoryDocumentStore::new();
        let blobs = FakeBlobStore::new();
        let mut editor = SingleEditor::<Profile>::new();
        editor.load(&store).await.unwrap();

        editor.bind_draft(profile_draft());
        let image = ImageUpload {
            file_name: "me.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![9, 9],
        };
        let saved = editor
            .submit(&store, &blobs, Some(image), now())
            .await
            .unwrap();

        assert!(saved.photo_url.starts_with("https://blobs.test/photos/"));
        let doc = store.get_raw("portfolio", "profile").unwrap();
        assert_eq!(doc["photoUrl"], saved.photo_url);
    }

    #[tokio::test]
    async fn invalid_draft_reports_first_rule_and_stays_local() {
        let store = InMemoryDocumentStore::new();
        let blobs = FakeBlobStore::new();
        let mut editor = SingleEditor::<Profile>::new();
        editor.load(&store).await.unwrap();

        // Missing photo AND missing name: only the photo rule fires.
        let mut draft = profile_draft();
        draft.name.clear();
        editor.bind_draft(draft);

        let err = editor.submit(&store, &blobs, None, now()).await.unwrap_err();
        match err {
            SingleSubmitError::Invalid(v) => assert_eq!(v.field, "photo"),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(store.put_count(), 0);
        assert_eq!(blobs.upload_count(), 0);
    }

    #[tokio::test]
    async fn reload_after_save_round_trips() {
        let store = InMemoryDocumentStore::new();
        let blobs = FakeBlobStore::new();
        let mut editor = SingleEditor::<Profile>::new();
        editor.load(&store).await.unwrap();

        let mut draft = profile_draft();
        draft.photo_url = "https://blobs.test/photos/existing.jpg".into();
        editor.bind_draft(draft.clone());
        editor.submit(&store, &blobs, None, now()).await.unwrap();

        let mut fresh = SingleEditor::<Profile>::new();
        fresh.load(&store).await.unwrap();
        assert_eq!(fresh.record().name, draft.name);
        assert_eq!(fresh.record().updated_at, Some(now()));
    }
}
