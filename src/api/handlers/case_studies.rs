use crate::api::error::AppError;
use crate::entities::{case_studies, prelude::*};
use crate::utils::auth::Claims;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, ToSchema)]
pub struct CaseStudyResponse {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub role: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub result: String,
    pub technologies: Vec<String>,
    pub featured_media_id: Option<String>,
    pub project_date: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<case_studies::Model> for CaseStudyResponse {
    fn from(cs: case_studies::Model) -> Self {
        let technologies = serde_json::from_value(cs.technologies).unwrap_or_default();
        Self {
            id: cs.id,
            title: cs.title,
            subtitle: cs.subtitle,
            role: cs.role,
            description: cs.description,
            challenge: cs.challenge,
            solution: cs.solution,
            result: cs.result,
            technologies,
            featured_media_id: cs.featured_media_id,
            project_date: cs.project_date,
            created_at: cs.created_at,
            updated_at: cs.updated_at,
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateCaseStudyRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub featured_media_id: Option<String>,
    #[validate(length(min = 1, message = "Project date is required"))]
    pub project_date: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateCaseStudyRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub featured_media_id: Option<String>,
    pub project_date: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/case-studies",
    responses(
        (status = 200, description = "Case studies, most recent project first", body = [CaseStudyResponse])
    ),
    tag = "case-studies"
)]
pub async fn list_case_studies(
    State(state): State<crate::AppState>,
) -> Result<Json<Vec<CaseStudyResponse>>, AppError> {
    let list = CaseStudies::find()
        .order_by_desc(case_studies::Column::ProjectDate)
        .all(&state.db)
        .await?;
    Ok(Json(list.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/admin/case-studies",
    request_body = CreateCaseStudyRequest,
    responses(
        (status = 201, description = "Case study created", body = CaseStudyResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "case-studies"
)]
pub async fn create_case_study(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    Json(req): Json<CreateCaseStudyRequest>,
) -> Result<(StatusCode, Json<CaseStudyResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let now = Utc::now();
    let model = case_studies::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(req.title),
        subtitle: Set(req.subtitle),
        role: Set(req.role),
        description: Set(req.description),
        challenge: Set(req.challenge),
        solution: Set(req.solution),
        result: Set(req.result),
        technologies: Set(serde_json::json!(req.technologies)),
        featured_media_id: Set(req.featured_media_id.filter(|s| !s.trim().is_empty())),
        project_date: Set(req.project_date),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = model.insert(&state.db).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/admin/case-studies/{id}",
    request_body = UpdateCaseStudyRequest,
    params(
        ("id" = String, Path, description = "Case study ID")
    ),
    responses(
        (status = 200, description = "Case study updated", body = CaseStudyResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Case study not found")
    ),
    security(("jwt" = [])),
    tag = "case-studies"
)]
pub async fn update_case_study(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCaseStudyRequest>,
) -> Result<Json<CaseStudyResponse>, AppError> {
    let existing = CaseStudies::find_by_id(&id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("Case study not found".to_string()))?;

    let mut active = existing.into_active_model();
    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(subtitle) = req.subtitle {
        active.subtitle = Set(subtitle);
    }
    if let Some(role) = req.role {
        active.role = Set(role);
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(challenge) = req.challenge {
        active.challenge = Set(challenge);
    }
    if let Some(solution) = req.solution {
        active.solution = Set(solution);
    }
    if let Some(result) = req.result {
        active.result = Set(result);
    }
    if let Some(technologies) = req.technologies {
        active.technologies = Set(serde_json::json!(technologies));
    }
    if let Some(featured_media_id) = req.featured_media_id {
        active.featured_media_id = Set(Some(featured_media_id).filter(|s| !s.trim().is_empty()));
    }
    if let Some(project_date) = req.project_date {
        active.project_date = Set(project_date);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(&state.db).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/case-studies/{id}",
    params(
        ("id" = String, Path, description = "Case study ID")
    ),
    responses(
        (status = 204, description = "Case study deleted (or already gone)"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "case-studies"
)]
pub async fn delete_case_study(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let res = CaseStudies::delete_by_id(&id).exec(&state.db).await?;
    if res.rows_affected == 0 {
        tracing::warn!("Delete requested for missing case study: {}", id);
    }
    Ok(StatusCode::NO_CONTENT)
}
