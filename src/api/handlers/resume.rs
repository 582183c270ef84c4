use crate::api::error::AppError;
use crate::utils::auth::Claims;
use axum::{
    Extension, Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ResumeResponse {
    pub url: String,
}

#[utoipa::path(
    get,
    path = "/api/resume",
    responses(
        (status = 200, description = "Public resume URL", body = ResumeResponse),
        (status = 404, description = "No resume uploaded yet")
    ),
    tag = "resume"
)]
pub async fn get_resume(
    State(state): State<crate::AppState>,
) -> Result<Json<ResumeResponse>, AppError> {
    let url = state.resume_service.resolve_url().await?;
    Ok(Json(ResumeResponse { url }))
}

#[utoipa::path(
    post,
    path = "/api/admin/resume",
    request_body(content = Multipart, description = "Resume PDF, overwrites the previous one"),
    responses(
        (status = 200, description = "Resume stored", body = ResumeResponse),
        (status = 400, description = "No file provided"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "resume"
)]
pub async fn upload_resume(
    State(state): State<crate::AppState>,
    Extension(_claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<Json<ResumeResponse>, AppError> {
    let mut data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name().unwrap_or_default() == "file" {
            content_type = field.content_type().map(|s| s.to_string());
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec(),
            );
        }
    }

    let data = data.ok_or(AppError::BadRequest("No file provided".to_string()))?;
    let url = state
        .resume_service
        .upload(data, content_type.as_deref())
        .await?;

    Ok(Json(ResumeResponse { url }))
}
