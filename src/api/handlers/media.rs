use crate::api::error::AppError;
use crate::entities::{media_items, prelude::*};
use crate::services::media::IncomingFile;
use crate::services::presentation::{MediaGroup, group_media_by_project};
use crate::utils::auth::Claims;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MediaItemResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    /// "image" or "video"
    pub media_type: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<media_items::Model> for MediaItemResponse {
    fn from(m: media_items::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            media_type: m.media_type,
            url: m.url,
            thumbnail: m.thumbnail,
            project_id: m.project_id,
            project_name: m.project_name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct ReassignProjectRequest {
    /// Empty or missing clears the assignment
    pub project_id: Option<String>,
    pub project_name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/media",
    responses(
        (status = 200, description = "All media items", body = [MediaItemResponse])
    ),
    tag = "media"
)]
pub async fn list_media(
    State(state): State<crate::AppState>,
) -> Result<Json<Vec<MediaItemResponse>>, AppError> {
    let items = MediaItems::find().all(&state.db).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/media/grouped",
    responses(
        (status = 200, description = "Media grouped by project, orphans under Unassigned")
    ),
    tag = "media"
)]
pub async fn list_media_grouped(
    State(state): State<crate::AppState>,
) -> Result<Json<Vec<MediaGroup>>, AppError> {
    let items = MediaItems::find().all(&state.db).await?;
    Ok(Json(group_media_by_project(items)))
}

#[utoipa::path(
    post,
    path = "/api/admin/media",
    request_body(content = Multipart, description = "One or more files plus title/description fields"),
    responses(
        (status = 200, description = "Media uploaded", body = [MediaItemResponse]),
        (status = 400, description = "No file selected"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "media"
)]
pub async fn upload_media(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<Json<Vec<MediaItemResponse>>, AppError> {
    let mut title = String::new();
    let mut description = String::new();
    let mut project_id: Option<String> = None;
    let mut project_name: Option<String> = None;
    let mut files: Vec<IncomingFile> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        let err_msg = e.to_string();
        if err_msg.contains("length limit exceeded") {
            AppError::PayloadTooLarge("Request body exceeds the maximum allowed limit".to_string())
        } else {
            AppError::BadRequest(err_msg)
        }
    })? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let filename = field.file_name().unwrap_or("unnamed").to_string();
            let content_type = field.content_type().map(|s| s.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?
                .to_vec();
            files.push(IncomingFile {
                filename,
                content_type,
                data,
            });
        } else if name == "title" {
            title = field.text().await.unwrap_or_default();
        } else if name == "description" {
            description = field.text().await.unwrap_or_default();
        } else if name == "project_id" {
            let text = field.text().await.unwrap_or_default();
            if !text.is_empty() && text != "null" {
                project_id = Some(text);
            }
        } else if name == "project_name" {
            let text = field.text().await.unwrap_or_default();
            if !text.is_empty() {
                project_name = Some(text);
            }
        }
    }

    // Local validation before any storage call
    if files.is_empty() {
        return Err(AppError::BadRequest(
            "Please select at least one file to upload".to_string(),
        ));
    }

    let items = state
        .media_service
        .upload_many(files, title, description, project_id, project_name)
        .await?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    put,
    path = "/api/admin/media/{id}/project",
    request_body = ReassignProjectRequest,
    params(
        ("id" = String, Path, description = "Media item ID")
    ),
    responses(
        (status = 200, description = "Media reassigned", body = MediaItemResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Media item not found")
    ),
    security(("jwt" = [])),
    tag = "media"
)]
pub async fn reassign_media_project(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<ReassignProjectRequest>,
) -> Result<Json<MediaItemResponse>, AppError> {
    let item = state
        .media_service
        .reassign_project(&id, req.project_id, req.project_name)
        .await?;
    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/media/{id}",
    params(
        ("id" = String, Path, description = "Media item ID")
    ),
    responses(
        (status = 204, description = "Media deleted (or already gone)"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "media"
)]
pub async fn delete_media(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.media_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
