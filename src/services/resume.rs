use crate::api::error::AppError;
use crate::services::storage::StorageService;
use std::sync::Arc;

/// Fixed well-known key for the single resume file. Re-uploads overwrite it
/// in place; there is no versioning.
pub const RESUME_KEY: &str = "resume/resume.pdf";

pub struct ResumeService {
    storage: Arc<dyn StorageService>,
}

impl ResumeService {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    pub async fn upload(&self, data: Vec<u8>, content_type: Option<&str>) -> Result<String, AppError> {
        if data.is_empty() {
            return Err(AppError::BadRequest("No file provided".to_string()));
        }

        self.storage
            .upload_file(RESUME_KEY, data, content_type.or(Some("application/pdf")))
            .await
            .map_err(|e| {
                tracing::error!("Failed to upload resume: {:?}", e);
                AppError::Internal("Failed to upload resume".to_string())
            })?;

        tracing::info!("📄 Resume replaced at {}", RESUME_KEY);
        Ok(self.storage.get_download_url(RESUME_KEY))
    }

    /// Resolves the public resume URL, or `NotFound` when nothing has ever
    /// been uploaded.
    pub async fn resolve_url(&self) -> Result<String, AppError> {
        let exists = self.storage.file_exists(RESUME_KEY).await.map_err(|e| {
            tracing::error!("Failed to check resume existence: {:?}", e);
            AppError::Internal("Failed to resolve resume".to_string())
        })?;

        if exists {
            Ok(self.storage.get_download_url(RESUME_KEY))
        } else {
            Err(AppError::NotFound("Resume not uploaded yet".to_string()))
        }
    }
}
