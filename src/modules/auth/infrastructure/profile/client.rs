use async_trait::async_trait;
use tracing::debug;

use crate::modules::auth::domain::{AuthSession, ProfileRepository, UserProfileSeed};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppResult, ProviderError};
use crate::shared::http::HttpHandler;

use super::{
    dto::FirestoreErrorBody,
    mapper::FirestoreMapper,
};

/// REST client for the document store holding user profiles.
pub struct FirestoreClient {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
}

impl FirestoreClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(30, "Nagare-Anime-App/1.0")?;

        Ok(Self {
            client,
            base_url: config.firestore_base_url.clone(),
            project_id: config.firebase_project_id.clone(),
        })
    }

    fn document_url(&self, uid: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/users/{}",
            self.base_url, self.project_id, uid
        )
    }
}

#[async_trait]
impl ProfileRepository for FirestoreClient {
    async fn write_profile_seed(
        &self,
        session: AuthSession,
        seed: UserProfileSeed,
    ) -> Result<(), ProviderError> {
        let body = FirestoreMapper::seed_document(&seed)
            .map_err(|e| ProviderError::new("invalid-argument", e.to_string()))?;

        debug!("writing profile seed for {}", session.uid);

        let response = self
            .client
            .patch(self.document_url(&session.uid))
            .bearer_auth(&session.id_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                ProviderError::new("unavailable", format!("A network error has occurred: {}", e))
            })?;

        if response.status().is_success() {
            return Ok(());
        }

        match response.json::<FirestoreErrorBody>().await {
            Ok(body) => Err(FirestoreMapper::to_provider_error(
                body.error.status.as_deref(),
                body.error.message,
            )),
            Err(e) => Err(ProviderError::new(
                "unknown",
                format!("Unreadable document store error response: {}", e),
            )),
        }
    }
}
