use crate::shared::errors::{AppError, AppResult};

const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const DEFAULT_ANILIST_BASE_URL: &str = "https://graphql.anilist.co";
const DEFAULT_GOGOANIME_BASE_URL: &str = "https://gogoanime.consumet.stream";

/// Application configuration resolved from the environment.
///
/// Base URLs are overridable so tests and local emulators can point the
/// clients somewhere else without touching code.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub firebase_api_key: String,
    pub firebase_project_id: String,
    pub identity_base_url: String,
    pub firestore_base_url: String,
    pub anilist_base_url: String,
    pub gogoanime_base_url: String,
}

impl AppConfig {
    /// Load configuration from the environment, reading a `.env` file first
    /// if one is present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let firebase_api_key = required_var("FIREBASE_API_KEY")?;
        let firebase_project_id = required_var("FIREBASE_PROJECT_ID")?;

        Ok(Self {
            firebase_api_key,
            firebase_project_id,
            identity_base_url: optional_var("FIREBASE_AUTH_URL", DEFAULT_IDENTITY_BASE_URL),
            firestore_base_url: optional_var("FIRESTORE_URL", DEFAULT_FIRESTORE_BASE_URL),
            anilist_base_url: optional_var("ANILIST_API_URL", DEFAULT_ANILIST_BASE_URL),
            gogoanime_base_url: optional_var("GOGOANIME_API_URL", DEFAULT_GOGOANIME_BASE_URL),
        })
    }
}

fn required_var(name: &str) -> AppResult<String> {
    std::env::var(name)
        .map_err(|_| AppError::InvalidInput(format!("Missing environment variable: {}", name)))
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
