use crate::api::error::AppError;
use crate::entities::prelude::*;
use crate::services::presentation::{recent_projects, sort_projects_by_date, truncate_text};
use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::EntityTrait;
use serde::Serialize;
use utoipa::ToSchema;

use super::media::MediaItemResponse;
use super::projects::ProjectResponse;

const PREVIEW_CHARS: usize = 200;

#[derive(Serialize, ToSchema)]
pub struct PortfolioEntry {
    #[serde(flatten)]
    pub project: ProjectResponse,
    /// Description clipped for the grid card; the full text is in `description`.
    pub description_preview: String,
    pub media: Vec<MediaItemResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    pub media: Vec<MediaItemResponse>,
    /// Resolved best-effort; a dangling featured_media_id yields null.
    pub featured_media: Option<MediaItemResponse>,
}

async fn build_entries(
    state: &crate::AppState,
    projects: Vec<crate::entities::projects::Model>,
) -> Result<Vec<PortfolioEntry>, AppError> {
    // One media query per project, matching the page's fetch pattern.
    // Fine at this scale; revisit with a joined query if the catalog grows.
    let mut entries = Vec::with_capacity(projects.len());
    for project in projects {
        let media = state.media_service.media_by_project(&project.id).await?;
        let preview = truncate_text(&project.description, PREVIEW_CHARS);
        entries.push(PortfolioEntry {
            project: project.into(),
            description_preview: preview,
            media: media.into_iter().map(Into::into).collect(),
        });
    }
    Ok(entries)
}

#[utoipa::path(
    get,
    path = "/api/portfolio",
    responses(
        (status = 200, description = "Projects for the grid, most recent first, with their media", body = [PortfolioEntry])
    ),
    tag = "portfolio"
)]
pub async fn portfolio_grid(
    State(state): State<crate::AppState>,
) -> Result<Json<Vec<PortfolioEntry>>, AppError> {
    let projects = Projects::find().all(&state.db).await?;
    let sorted = sort_projects_by_date(projects);
    Ok(Json(build_entries(&state, sorted).await?))
}

#[utoipa::path(
    get,
    path = "/api/projects/recent",
    responses(
        (status = 200, description = "The two most recent projects with their media", body = [PortfolioEntry])
    ),
    tag = "portfolio"
)]
pub async fn recent(
    State(state): State<crate::AppState>,
) -> Result<Json<Vec<PortfolioEntry>>, AppError> {
    let projects = Projects::find().all(&state.db).await?;
    let recent = recent_projects(projects);
    Ok(Json(build_entries(&state, recent).await?))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project detail with media for the carousel", body = ProjectDetailResponse),
        (status = 404, description = "Project not found")
    ),
    tag = "portfolio"
)]
pub async fn project_detail(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    let project = Projects::find_by_id(&id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Project not found".to_string()))?;

    let media = state.media_service.media_by_project(&project.id).await?;

    let featured_media = match project.featured_media_id.as_deref() {
        Some(media_id) => MediaItems::find_by_id(media_id).one(&state.db).await?,
        None => None,
    };

    Ok(Json(ProjectDetailResponse {
        project: project.into(),
        media: media.into_iter().map(Into::into).collect(),
        featured_media: featured_media.map(Into::into),
    }))
}
