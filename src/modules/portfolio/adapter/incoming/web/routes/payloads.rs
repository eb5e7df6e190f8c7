use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::media::application::domain::image::ImageUpload;

/// File attachment as carried inside an admin save request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub file_name: String,
    pub content_type: String,
    /// Base64-encoded file bytes.
    pub data: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ImagePayloadError {
    NotAnImage,
    BadEncoding,
}

impl ImagePayload {
    pub fn decode(self) -> Result<ImageUpload, ImagePayloadError> {
        let bytes = STANDARD
            .decode(self.data.as_bytes())
            .map_err(|_| ImagePayloadError::BadEncoding)?;

        let upload = ImageUpload {
            file_name: self.file_name,
            content_type: self.content_type,
            bytes,
        };
        if !upload.is_image() {
            return Err(ImagePayloadError::NotAnImage);
        }
        Ok(upload)
    }
}
