use std::env;

/// Runtime configuration for the portfolio backend
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum upload size in bytes (default: 256 MB)
    pub max_upload_size: usize,

    /// JWT Secret Key (Required in production)
    pub jwt_secret: String,

    /// Admin login email
    pub admin_email: String,

    /// Argon2 PHC hash of the admin password
    pub admin_password_hash: String,

    /// Allowed CORS Origins (comma separated)
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_size: 256 * 1024 * 1024, // 256 MB
            jwt_secret: "secret".to_string(),
            admin_email: "admin@localhost".to_string(),
            admin_password_hash: String::new(),
            // More secure default: localhost only instead of wildcard
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(), // Vite default
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),

            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string()), // Fallback for dev convenience, strictly enforced in production method

            admin_email: env::var("ADMIN_EMAIL").unwrap_or(default.admin_email),

            admin_password_hash: env::var("ADMIN_PASSWORD_HASH")
                .unwrap_or(default.admin_password_hash),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.allowed_origins),
        }
    }

    /// Create config for production (strict security)
    pub fn production() -> Self {
        let default = Self::default();
        Self {
            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),
            jwt_secret: env::var("JWT_SECRET").expect("CRITICAL: JWT_SECRET must be set"),
            admin_email: env::var("ADMIN_EMAIL").expect("CRITICAL: ADMIN_EMAIL must be set"),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH")
                .expect("CRITICAL: ADMIN_PASSWORD_HASH must be set"),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.allowed_origins),
        }
    }
}
