use axum::{Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EventRequest {
    /// e.g. page_view, contact_form_submission, social_link_click, theme_toggle
    pub event: String,
    #[serde(default)]
    pub properties: serde_json::Value,
}

/// Analytics passthrough. Events are structured-logged and dropped; there is
/// no local aggregation.
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = EventRequest,
    responses(
        (status = 204, description = "Event recorded")
    ),
    tag = "system"
)]
pub async fn track_event(Json(req): Json<EventRequest>) -> StatusCode {
    tracing::info!(
        target: "analytics",
        event = %req.event,
        properties = %req.properties,
        "📊 analytics event"
    );
    StatusCode::NO_CONTENT
}
