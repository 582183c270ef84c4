pub mod api;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::media::MediaService;
use crate::services::resume::ResumeService;
use axum::{
    Router,
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::health::health_check,
        api::handlers::auth::login,
        api::handlers::portfolio::portfolio_grid,
        api::handlers::portfolio::recent,
        api::handlers::portfolio::project_detail,
        api::handlers::projects::list_projects,
        api::handlers::projects::create_project,
        api::handlers::projects::update_project,
        api::handlers::projects::delete_project,
        api::handlers::case_studies::list_case_studies,
        api::handlers::case_studies::create_case_study,
        api::handlers::case_studies::update_case_study,
        api::handlers::case_studies::delete_case_study,
        api::handlers::media::list_media,
        api::handlers::media::list_media_grouped,
        api::handlers::media::upload_media,
        api::handlers::media::reassign_media_project,
        api::handlers::media::delete_media,
        api::handlers::contact::submit_contact,
        api::handlers::resume::get_resume,
        api::handlers::resume::upload_resume,
        api::handlers::events::track_event,
    ),
    components(
        schemas(
            api::handlers::auth::LoginRequest,
            api::handlers::auth::LoginResponse,
            api::handlers::health::HealthResponse,
            api::handlers::media::MediaItemResponse,
            api::handlers::media::ReassignProjectRequest,
            api::handlers::projects::ProjectResponse,
            api::handlers::projects::CreateProjectRequest,
            api::handlers::projects::UpdateProjectRequest,
            api::handlers::case_studies::CaseStudyResponse,
            api::handlers::case_studies::CreateCaseStudyRequest,
            api::handlers::case_studies::UpdateCaseStudyRequest,
            api::handlers::contact::ContactRequest,
            api::handlers::contact::ContactResponse,
            api::handlers::resume::ResumeResponse,
            api::handlers::events::EventRequest,
            api::handlers::portfolio::PortfolioEntry,
            api::handlers::portfolio::ProjectDetailResponse,
        )
    ),
    tags(
        (name = "portfolio", description = "Public read endpoints for the site pages"),
        (name = "media", description = "Media library"),
        (name = "projects", description = "Project management"),
        (name = "case-studies", description = "Case study management"),
        (name = "contact", description = "Contact form inbox"),
        (name = "resume", description = "Resume file"),
        (name = "auth", description = "Admin authentication"),
        (name = "system", description = "Health and analytics")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media_service: Arc<MediaService>,
    pub resume_service: Arc<ResumeService>,
    pub config: AppConfig,
}

pub fn create_app(state: AppState) -> Router {
    let cors = {
        let origins: Vec<HeaderValue> = state
            .config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        if state.config.allowed_origins.iter().any(|o| o == "*") {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let admin = Router::new()
        .route("/api/admin/media", post(api::handlers::media::upload_media))
        .route(
            "/api/admin/media/:id",
            axum::routing::delete(api::handlers::media::delete_media),
        )
        .route(
            "/api/admin/media/:id/project",
            put(api::handlers::media::reassign_media_project),
        )
        .route(
            "/api/admin/projects",
            post(api::handlers::projects::create_project),
        )
        .route(
            "/api/admin/projects/:id",
            put(api::handlers::projects::update_project)
                .delete(api::handlers::projects::delete_project),
        )
        .route(
            "/api/admin/case-studies",
            post(api::handlers::case_studies::create_case_study),
        )
        .route(
            "/api/admin/case-studies/:id",
            put(api::handlers::case_studies::update_case_study)
                .delete(api::handlers::case_studies::delete_case_study),
        )
        .route(
            "/api/admin/resume",
            post(api::handlers::resume::upload_resume),
        )
        .layer(from_fn_with_state(
            state.clone(),
            api::middleware::auth::auth_middleware,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(api::handlers::health::health_check))
        .route("/api/admin/login", post(api::handlers::auth::login))
        .route(
            "/api/portfolio",
            get(api::handlers::portfolio::portfolio_grid),
        )
        .route(
            "/api/projects/recent",
            get(api::handlers::portfolio::recent),
        )
        .route(
            "/api/projects/:id",
            get(api::handlers::portfolio::project_detail),
        )
        .route("/api/projects", get(api::handlers::projects::list_projects))
        .route(
            "/api/case-studies",
            get(api::handlers::case_studies::list_case_studies),
        )
        .route("/api/media", get(api::handlers::media::list_media))
        .route(
            "/api/media/grouped",
            get(api::handlers::media::list_media_grouped),
        )
        .route("/api/contact", post(api::handlers::contact::submit_contact))
        .route("/api/resume", get(api::handlers::resume::get_resume))
        .route("/api/events", post(api::handlers::events::track_event))
        .merge(admin)
        .layer(cors)
        .layer(axum::extract::DefaultBodyLimit::max(
            state.config.max_upload_size + 10 * 1024 * 1024, // multipart overhead buffer
        ))
        .with_state(state)
}
