use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::media::application::ports::outgoing::blob_store::{BlobStore, BlobStoreError};

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

/// Uploaded objects are served straight from the bucket's public endpoint.
fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{bucket}/{object_name}")
}

fn map_upload_error(msg: &str) -> BlobStoreError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        BlobStoreError::Rejected("access denied".into())
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        BlobStoreError::Rejected("bucket not found".into())
    } else {
        BlobStoreError::Unreachable(msg.to_string())
    }
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types/streams.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0.upload_object(bucket_resource, object_name, bytes).await
    }
}

/// Production adapter: implements the BlobStore port against GCS.
#[derive(Clone)]
pub struct GcsBlobStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl GcsBlobStore {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket,
        }
    }

    pub fn from_env() -> Self {
        let bucket = std::env::var("GCS_MEDIA_BUCKET").expect("GCS_MEDIA_BUCKET is not set");
        Self::new(bucket)
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, anyhow::Error> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with pre-initialized client.
    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for GcsBlobStore {
    async fn upload(
        &self,
        path: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, BlobStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| BlobStoreError::Unreachable(e.to_string()))?;

        let bucket = bucket_resource(&self.bucket);
        client
            .upload_object(&bucket, path, bytes)
            .await
            .map_err(|e| map_upload_error(&e))?;

        Ok(public_url(&self.bucket, path))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
}

impl RealGcsClient {
    async fn new() -> Result<Self, anyhow::Error> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        tracing::info!("GCS storage client created");

        Ok(Self { storage })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_unbuffered()
            .await
            .map(|_object| ())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeGcsClient {
        last_upload: Mutex<Option<(String, String, usize)>>,
        upload_result: Mutex<Result<(), String>>,
    }

    impl Default for FakeGcsClient {
        fn default() -> Self {
            Self {
                last_upload: Mutex::new(None),
                upload_result: Mutex::new(Ok(())),
            }
        }
    }

    impl FakeGcsClient {
        fn set_upload_result(&self, r: Result<(), String>) {
            *self.upload_result.lock().unwrap() = r;
        }
    }

    #[async_trait]
    impl GcsClient for FakeGcsClient {
        async fn upload_object(
            &self,
            bucket_resource: &str,
            object_name: &str,
            bytes: Vec<u8>,
        ) -> Result<(), String> {
            *self.last_upload.lock().unwrap() = Some((
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes.len(),
            ));
            self.upload_result.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn upload_targets_the_bucket_resource_and_returns_public_url() {
        let fake = Arc::new(FakeGcsClient::default());
        let store = GcsBlobStore::with_client(fake.clone(), "portfolio-media");

        let url = store
            .upload("logos/1700_acme.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();

        assert_eq!(
            url,
            "https://storage.googleapis.com/portfolio-media/logos/1700_acme.png"
        );
        let call = fake.last_upload.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/portfolio-media");
        assert_eq!(call.1, "logos/1700_acme.png");
        assert_eq!(call.2, 3);
    }

    #[tokio::test]
    async fn permission_errors_map_to_rejected() {
        let fake = Arc::new(FakeGcsClient::default());
        fake.set_upload_result(Err("403 permission denied".into()));
        let store = GcsBlobStore::with_client(fake, "portfolio-media");

        let err = store
            .upload("logos/x.png", "image/png", vec![1])
            .await
            .unwrap_err();
        assert!(matches!(err, BlobStoreError::Rejected(_)));
    }

    #[tokio::test]
    async fn network_errors_map_to_unreachable() {
        let fake = Arc::new(FakeGcsClient::default());
        fake.set_upload_result(Err("connection reset by peer".into()));
        let store = GcsBlobStore::with_client(fake, "portfolio-media");

        let err = store
            .upload("logos/x.png", "image/png", vec![1])
            .await
            .unwrap_err();
        assert!(matches!(err, BlobStoreError::Unreachable(_)));
    }
}
