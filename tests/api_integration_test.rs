mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use portfolio_backend::create_app;
use serde_json::{Value, json};
use tower::ServiceExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({"email": common::ADMIN_EMAIL, "password": common::ADMIN_PASSWORD}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_admin_content_flow() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("portfolio_backend=debug,tower_http=debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();

    let (state, storage) = common::setup_state().await;
    let app = create_app(state.clone());

    // Admin routes reject missing tokens
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/projects",
            None,
            json!({"name": "nope"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Wrong password is rejected
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({"email": common::ADMIN_EMAIL, "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = login(&app).await;

    // Create a project
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/projects",
            Some(&token),
            json!({
                "name": "Portfolio Site",
                "description": "The site itself",
                "technologies": ["Rust", "Axum"],
                "project_date": "2024-03-10",
                "live_url": "https://example.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let project_id = created["id"].as_str().unwrap().to_string();
    // Ids are always generated server-side
    assert_eq!(project_id.len(), 36);
    assert_eq!(created["name"], "Portfolio Site");
    assert_eq!(created["technologies"], json!(["Rust", "Axum"]));

    // Round-trip: the created project appears in the list with its fields
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    let entry = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == created["id"])
        .expect("created project missing from list");
    assert_eq!(entry["description"], "The site itself");
    assert!(entry["created_at"].is_string());

    // Partial update: only the named field changes
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/admin/projects/{}", project_id),
            Some(&token),
            json!({"name": "Portfolio Site v2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Portfolio Site v2");
    assert_eq!(updated["description"], "The site itself");

    // Updating a missing project is a 404, checked before any write
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/admin/projects/does-not-exist",
            Some(&token),
            json!({"name": "ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Upload a media file assigned to the project
    let boundary = "---------------------------123456789012345678901234567";
    let multipart_body = format!(
        "--{boundary}\r\n\
        Content-Disposition: form-data; name=\"title\"\r\n\r\n\
        Launch screenshot\r\n\
        --{boundary}\r\n\
        Content-Disposition: form-data; name=\"description\"\r\n\r\n\
        Home page\r\n\
        --{boundary}\r\n\
        Content-Disposition: form-data; name=\"project_id\"\r\n\r\n\
        {project_id}\r\n\
        --{boundary}\r\n\
        Content-Disposition: form-data; name=\"project_name\"\r\n\r\n\
        Portfolio Site v2\r\n\
        --{boundary}\r\n\
        Content-Disposition: form-data; name=\"file\"; filename=\"photo.png\"\r\n\
        Content-Type: image/png\r\n\r\n\
        fakepngbytes\r\n\
        --{boundary}--\r\n",
        boundary = boundary,
        project_id = project_id
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/media")
                .header("Authorization", format!("Bearer {}", token))
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(multipart_body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let uploaded = body_json(response).await;
    let item = &uploaded.as_array().unwrap()[0];
    // Type derived from the MIME prefix at upload time
    assert_eq!(item["media_type"], "image");
    assert_eq!(item["project_id"], json!(project_id));
    let url = item["url"].as_str().unwrap();
    assert!(url.contains("photo.png"));
    assert!(url.contains("media/"));

    // The object landed in storage under a timestamped media key
    {
        let files = storage.files.lock().unwrap();
        let key = files
            .keys()
            .find(|k| k.contains("photo.png"))
            .expect("no media key in storage");
        assert!(key.starts_with("media/"));
    }

    let media_id = item["id"].as_str().unwrap().to_string();

    // Clear the project assignment
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/admin/media/{}/project", media_id),
            Some(&token),
            json!({"project_id": "", "project_name": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reassigned = body_json(response).await;
    assert!(reassigned["project_id"].is_null());

    // Upload with no file parts fails locally, nothing reaches storage
    let empty_body = format!(
        "--{boundary}\r\n\
        Content-Disposition: form-data; name=\"title\"\r\n\r\n\
        Nothing here\r\n\
        --{boundary}--\r\n",
        boundary = boundary
    );
    let files_before = storage.files.lock().unwrap().len();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/media")
                .header("Authorization", format!("Bearer {}", token))
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(empty_body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(storage.files.lock().unwrap().len(), files_before);

    // Deleting twice does not error: the second call is a no-op
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/admin/media/{}", media_id))
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    // Delete the project; media (already deleted here) is never cascaded
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/projects/{}", project_id))
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_resume_upload_and_resolve() {
    let (state, _storage) = common::setup_state().await;
    let app = create_app(state.clone());
    let token = login(&app).await;

    // Nothing uploaded yet
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/resume")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let boundary = "----resume-boundary";
    let multipart_body = format!(
        "--{boundary}\r\n\
        Content-Disposition: form-data; name=\"file\"; filename=\"resume.pdf\"\r\n\
        Content-Type: application/pdf\r\n\r\n\
        %PDF-1.5 fake\r\n\
        --{boundary}--\r\n",
        boundary = boundary
    );
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/resume")
                .header("Authorization", format!("Bearer {}", token))
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(multipart_body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let uploaded = body_json(response).await;
    // Fixed well-known key, overwritten in place
    assert!(uploaded["url"].as_str().unwrap().ends_with("resume/resume.pdf"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/resume")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let resolved = body_json(response).await;
    assert!(resolved["url"].as_str().unwrap().ends_with("resume/resume.pdf"));
}
