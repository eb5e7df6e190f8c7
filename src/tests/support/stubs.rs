//! Hand-rolled collaborator fakes shared across test modules.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::media::application::ports::outgoing::blob_store::{BlobStore, BlobStoreError};
use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};

/// Stateful in-memory document store with call counters, so tests can assert
/// both the stored payloads and "zero remote calls happened" properties.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    docs: Mutex<HashMap<(String, String), Value>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
    fail_next_put: AtomicBool,
    fail_all_gets: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, collection: &str, name: &str, doc: Value) {
        self.docs
            .lock()
            .unwrap()
            .insert((collection.to_string(), name.to_string()), doc);
    }

    pub fn get_raw(&self, collection: &str, name: &str) -> Option<Value> {
        self.docs
            .lock()
            .unwrap()
            .get(&(collection.to_string(), name.to_string()))
            .cloned()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn fail_next_put(&self) {
        self.fail_next_put.store(true, Ordering::SeqCst);
    }

    pub fn fail_all_gets(&self) {
        self.fail_all_gets.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(
        &self,
        collection: &str,
        name: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_all_gets.load(Ordering::SeqCst) {
            return Err(DocumentStoreError::Unavailable("connection refused".into()));
        }
        Ok(self.get_raw(collection, name))
    }

    async fn put(
        &self,
        collection: &str,
        name: &str,
        doc: Value,
    ) -> Result<(), DocumentStoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_put.swap(false, Ordering::SeqCst) {
            return Err(DocumentStoreError::Unavailable("write timed out".into()));
        }
        self.docs
            .lock()
            .unwrap()
            .insert((collection.to_string(), name.to_string()), doc);
        Ok(())
    }
}

/// Blob store fake returning deterministic URLs under `https://blobs.test/`.
#[derive(Default)]
pub struct FakeBlobStore {
    uploads: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl FakeBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for FakeBlobStore {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, BlobStoreError> {
        if self.fail {
            return Err(BlobStoreError::Unreachable("bucket offline".into()));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), content_type.to_string()));
        Ok(format!("https://blobs.test/{path}"))
    }
}
