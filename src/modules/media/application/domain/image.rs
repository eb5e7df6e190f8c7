/// A decoded file attachment carried alongside an admin save request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Blob path: `<category>/<millis>_<filename>`. The timestamp prefix
    /// keeps re-uploads of the same filename from clobbering each other.
    pub fn storage_path(&self, category: &str, millis: i64) -> String {
        format!("{category}/{millis}_{}", self.file_name)
    }
}
