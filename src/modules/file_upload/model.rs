use serde::Serialize;

/// Metadata of a file written to disk, before (or without) being persisted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFile {
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub path: String,
}

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub accepted_mime_prefix: String,
    pub upload_dir: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
            accepted_mime_prefix: "image/".to_string(),
            upload_dir: "uploads".to_string(),
        }
    }
}
