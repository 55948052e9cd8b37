use log::{info, warn};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::file_upload::{
    model::{NewFile, UploadConfig},
    repository::FileRepository,
    schema::FileEntity,
};

#[derive(Clone)]
pub struct FileUploadService {
    file_repo: Arc<dyn FileRepository + Send + Sync>,
    config: UploadConfig,
}

impl FileUploadService {
    pub fn new(file_repo: Arc<dyn FileRepository + Send + Sync>, config: UploadConfig) -> Self {
        info!("FileUploadService initialized, storing files in {}", config.upload_dir);
        Self { file_repo, config }
    }

    pub fn max_file_size(&self) -> usize {
        self.config.max_file_size
    }

    /// Validate file type and size
    fn validate_file(&self, file_size: usize, mime_type: &str) -> Result<(), error::SystemError> {
        if file_size > self.config.max_file_size {
            return Err(error::SystemError::bad_request(format!(
                "File size exceeds maximum allowed size of {} bytes",
                self.config.max_file_size
            )));
        }

        if !mime_type.starts_with(&self.config.accepted_mime_prefix) {
            return Err(error::SystemError::bad_request("Only image files are allowed!"));
        }

        Ok(())
    }

    /// `<unix millis>-<random suffix>` plus the original extension
    fn generate_filename(original_filename: &str) -> String {
        let extension =
            Path::new(original_filename).extension().and_then(|ext| ext.to_str()).unwrap_or("");
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix = Uuid::now_v7().simple().to_string();
        let suffix = &suffix[suffix.len() - 8..];
        if extension.is_empty() {
            format!("{}-{}", millis, suffix)
        } else {
            format!("{}-{}.{}", millis, suffix, extension)
        }
    }

    /// Save file to disk
    async fn save_file(&self, filename: &str, bytes: &[u8]) -> Result<String, error::SystemError> {
        tokio::fs::create_dir_all(&self.config.upload_dir).await?;

        let file_path = format!("{}/{}", self.config.upload_dir, filename);
        tokio::fs::write(&file_path, bytes).await?;

        Ok(file_path)
    }

    /// Validate and write the file to disk without recording it
    pub async fn store_file(
        &self,
        original_name: String,
        bytes: Vec<u8>,
        mime_type: String,
    ) -> Result<NewFile, error::SystemError> {
        self.validate_file(bytes.len(), &mime_type)?;

        let filename = Self::generate_filename(&original_name);
        let path = self.save_file(&filename, &bytes).await?;
        info!("Stored upload {} as {}", original_name, path);

        Ok(NewFile { original_name, mime_type, size: bytes.len() as i64, path })
    }

    /// Write the file to disk and persist its metadata
    pub async fn upload_file(
        &self,
        original_name: String,
        bytes: Vec<u8>,
        mime_type: String,
    ) -> Result<FileEntity, error::SystemError> {
        let new_file = self.store_file(original_name, bytes, mime_type).await?;

        match self.file_repo.create(&new_file).await {
            Ok(entity) => Ok(entity),
            Err(e) => {
                warn!("Removing {} after failed metadata insert", new_file.path);
                tokio::fs::remove_file(&new_file.path).await.ok();
                Err(e)
            }
        }
    }
}
