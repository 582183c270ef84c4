use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use portfolio_backend::AppState;
use portfolio_backend::config::AppConfig;
use portfolio_backend::infrastructure::database;
use portfolio_backend::services::media::MediaService;
use portfolio_backend::services::resume::ResumeService;
use portfolio_backend::services::storage::StorageService;
use sea_orm::Database;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "password123";

pub struct MockStorageService {
    pub files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockStorageService {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn upload_file(
        &self,
        key: &str,
        data: Vec<u8>,
        _content_type: Option<&str>,
    ) -> anyhow::Result<()> {
        self.files.lock().unwrap().insert(key.to_string(), data);
        Ok(())
    }

    async fn file_exists(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.files.lock().unwrap().contains_key(key))
    }

    fn get_download_url(&self, key: &str) -> String {
        format!("https://cdn.mock/test-bucket/{}", key)
    }
}

pub async fn setup_test_db() -> sea_orm::DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    database::run_migrations(&db).await.unwrap();
    db
}

pub fn test_config() -> AppConfig {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
        .unwrap()
        .to_string();

    AppConfig {
        max_upload_size: 16 * 1024 * 1024,
        jwt_secret: "test_secret".to_string(),
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password_hash: hash,
        allowed_origins: vec!["http://localhost:3000".to_string()],
    }
}

pub async fn setup_state() -> (AppState, Arc<MockStorageService>) {
    let db = setup_test_db().await;
    let storage = Arc::new(MockStorageService::new());
    let config = test_config();

    let media_service = Arc::new(MediaService::new(
        db.clone(),
        storage.clone(),
        config.clone(),
    ));
    let resume_service = Arc::new(ResumeService::new(storage.clone()));

    (
        AppState {
            db,
            media_service,
            resume_service,
            config,
        },
        storage,
    )
}
