use crate::api::error::AppError;
use crate::entities::contact_messages;
use axum::{Json, extract::State};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ContactResponse),
        (status = 400, description = "Missing required field, nothing was written")
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(state): State<crate::AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    // Validation failures never reach the database
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let model = contact_messages::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        first_name: Set(req.first_name),
        last_name: Set(req.last_name),
        email: Set(req.email),
        subject: Set(req.subject),
        message: Set(req.message),
        created_at: Set(Utc::now()),
    };

    let created = model.insert(&state.db).await?;
    tracing::info!("✉️  Contact message received: {}", created.id);

    Ok(Json(ContactResponse {
        success: true,
        id: created.id,
    }))
}
