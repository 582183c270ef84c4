use crate::api::error::AppError;
use crate::config::AppConfig;
use crate::entities::{media_items, prelude::*};
use crate::services::storage::StorageService;
use crate::utils::validation::{sanitize_filename, validate_file_size};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use uuid::Uuid;

/// A single file taken from the admin upload form.
pub struct IncomingFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Derives the media type once at upload time from the MIME prefix.
/// It is never recomputed or mutated afterwards.
pub fn media_kind(content_type: Option<&str>) -> &'static str {
    match content_type {
        Some(ct) if ct.starts_with("image/") => "image",
        _ => "video",
    }
}

pub struct MediaService {
    db: DatabaseConnection,
    storage: Arc<dyn StorageService>,
    config: AppConfig,
}

impl MediaService {
    pub fn new(db: DatabaseConnection, storage: Arc<dyn StorageService>, config: AppConfig) -> Self {
        Self {
            db,
            storage,
            config,
        }
    }

    /// Persists one file to object storage and creates its media document.
    ///
    /// Storage keys are disambiguated by a millisecond timestamp prefix:
    /// `media/<epoch-ms>_<filename>`. No further collision handling.
    pub async fn upload_media(
        &self,
        file: IncomingFile,
        title: String,
        description: String,
        project_id: Option<String>,
        project_name: Option<String>,
    ) -> Result<media_items::Model, AppError> {
        validate_file_size(file.data.len(), self.config.max_upload_size)
            .map_err(|e| AppError::PayloadTooLarge(e.to_string()))?;

        let filename = sanitize_filename(&file.filename)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let key = format!("media/{}_{}", Utc::now().timestamp_millis(), filename);

        self.storage
            .upload_file(&key, file.data, file.content_type.as_deref())
            .await
            .map_err(|e| {
                tracing::error!("Failed to upload media to storage: {:?}", e);
                AppError::Internal("Failed to upload media".to_string())
            })?;

        let url = self.storage.get_download_url(&key);
        let now = Utc::now();

        let item = media_items::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(title),
            description: Set(description),
            media_type: Set(media_kind(file.content_type.as_deref()).to_string()),
            url: Set(url),
            thumbnail: Set(None),
            project_id: Set(project_id),
            project_name: Set(project_name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = item.insert(&self.db).await?;
        tracing::info!("📷 Media uploaded: {} ({})", model.id, key);
        Ok(model)
    }

    /// Multi-file fan-out: fire all uploads, await all. There is no rollback
    /// of already-persisted files when a later one fails.
    pub async fn upload_many(
        &self,
        files: Vec<IncomingFile>,
        title: String,
        description: String,
        project_id: Option<String>,
        project_name: Option<String>,
    ) -> Result<Vec<media_items::Model>, AppError> {
        if files.is_empty() {
            return Err(AppError::BadRequest("No file provided".to_string()));
        }

        let uploads = files.into_iter().map(|file| {
            self.upload_media(
                file,
                title.clone(),
                description.clone(),
                project_id.clone(),
                project_name.clone(),
            )
        });

        let results = futures::future::join_all(uploads).await;

        let mut items = Vec::with_capacity(results.len());
        for result in results {
            items.push(result?);
        }
        Ok(items)
    }

    /// Moves a media item to another project (or clears the assignment when
    /// `project_id` is `None`). Check-then-write, like every update path.
    pub async fn reassign_project(
        &self,
        id: &str,
        project_id: Option<String>,
        project_name: Option<String>,
    ) -> Result<media_items::Model, AppError> {
        let item = MediaItems::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Media item not found".to_string()))?;

        let mut active = item.into_active_model();
        active.project_id = Set(project_id.filter(|p| !p.is_empty()));
        active.project_name = Set(project_name.filter(|p| !p.is_empty()));
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes the media document. Unconditional: deleting an id that is
    /// already gone is a no-op, not an error. The storage object is left in
    /// place, matching the weak-reference model.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = MediaItems::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            tracing::warn!("Delete requested for missing media item: {}", id);
        }
        Ok(())
    }

    /// Full-collection fetch with a client-side filter. O(n) per call, which
    /// is fine at personal-portfolio scale.
    pub async fn media_by_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<media_items::Model>, AppError> {
        let all = MediaItems::find().all(&self.db).await?;
        Ok(all
            .into_iter()
            .filter(|m| m.project_id.as_deref() == Some(project_id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_mime_prefix() {
        assert_eq!(media_kind(Some("image/png")), "image");
        assert_eq!(media_kind(Some("image/jpeg")), "image");
        assert_eq!(media_kind(Some("video/mp4")), "video");
        assert_eq!(media_kind(Some("video/quicktime")), "video");
        // Anything that is not an image is treated as video
        assert_eq!(media_kind(None), "video");
    }
}
