use crate::api::error::AppError;
use crate::entities::{prelude::*, projects};
use crate::utils::auth::Claims;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub featured_media_id: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub project_date: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<projects::Model> for ProjectResponse {
    fn from(p: projects::Model) -> Self {
        let technologies = p.technologies_vec();
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            technologies,
            image_url: p.image_url,
            featured_media_id: p.featured_media_id,
            live_url: p.live_url,
            github_url: p.github_url,
            project_date: p.project_date,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, message = "Project name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub featured_media_id: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub project_date: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub featured_media_id: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub project_date: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All projects in backend order", body = [ProjectResponse])
    ),
    tag = "projects"
)]
pub async fn list_projects(
    State(state): State<crate::AppState>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let list = Projects::find().all(&state.db).await?;
    Ok(Json(list.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/admin/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "projects"
)]
pub async fn create_project(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let now = Utc::now();
    let model = projects::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(req.name),
        description: Set(req.description),
        technologies: Set(serde_json::json!(req.technologies)),
        image_url: Set(req.image_url.filter(|s| !s.is_empty())),
        featured_media_id: Set(req.featured_media_id.filter(|s| !s.trim().is_empty())),
        live_url: Set(req.live_url.filter(|s| !s.is_empty())),
        github_url: Set(req.github_url.filter(|s| !s.is_empty())),
        project_date: Set(req.project_date.filter(|s| !s.is_empty())),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = model.insert(&state.db).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    request_body = UpdateProjectRequest,
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Project not found")
    ),
    security(("jwt" = [])),
    tag = "projects"
)]
pub async fn update_project(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    // Check-then-write: every update path verifies existence first
    let existing = Projects::find_by_id(&id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Project not found".to_string()))?;

    let mut active = existing.into_active_model();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(technologies) = req.technologies {
        active.technologies = Set(serde_json::json!(technologies));
    }
    if let Some(image_url) = req.image_url {
        active.image_url = Set(Some(image_url).filter(|s| !s.is_empty()));
    }
    if let Some(featured_media_id) = req.featured_media_id {
        active.featured_media_id = Set(Some(featured_media_id).filter(|s| !s.trim().is_empty()));
    }
    if let Some(live_url) = req.live_url {
        active.live_url = Set(Some(live_url).filter(|s| !s.is_empty()));
    }
    if let Some(github_url) = req.github_url {
        active.github_url = Set(Some(github_url).filter(|s| !s.is_empty()));
    }
    if let Some(project_date) = req.project_date {
        active.project_date = Set(Some(project_date).filter(|s| !s.is_empty()));
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted (or already gone)"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "projects"
)]
pub async fn delete_project(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    // Unconditional delete; no cascade to media, no unlinking
    let res = Projects::delete_by_id(&id).exec(&state.db).await?;
    if res.rows_affected == 0 {
        tracing::warn!("Delete requested for missing project: {}", id);
    }
    Ok(StatusCode::NO_CONTENT)
}
