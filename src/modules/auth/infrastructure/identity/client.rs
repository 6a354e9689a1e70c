use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::modules::auth::domain::{
    AuthSession, EmailCredentials, IdentityRepository, OAuthPopupProvider, ProfileUpdate,
};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppResult, ProviderError};
use crate::shared::http::HttpHandler;

use super::{
    dto::{AccountResponse, IdentityErrorBody, PasswordAccountRequest, UpdateAccountRequest},
    mapper::IdentityMapper,
};

/// REST client for the external identity platform's account endpoints.
///
/// Account operations are not idempotent, so requests are sent exactly once;
/// a transport failure surfaces as `auth/network-request-failed` rather than
/// being retried.
pub struct FirebaseAuthClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FirebaseAuthClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(30, "Nagare-Anime-App/1.0")?;

        Ok(Self {
            client,
            base_url: config.identity_base_url.clone(),
            api_key: config.firebase_api_key.clone(),
        })
    }

    async fn send(
        &self,
        action: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ProviderError> {
        let url = format!("{}/accounts:{}?key={}", self.base_url, action, self.api_key);

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            ProviderError::new(
                "auth/network-request-failed",
                format!("A network error has occurred: {}", e),
            )
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn post_account(
        &self,
        action: &str,
        body: &impl Serialize,
    ) -> Result<AccountResponse, ProviderError> {
        let response = self.send(action, body).await?;
        response.json::<AccountResponse>().await.map_err(|e| {
            ProviderError::new(
                "auth/internal-error",
                format!("Failed to parse identity response: {}", e),
            )
        })
    }

    async fn error_from_response(response: reqwest::Response) -> ProviderError {
        match response.json::<IdentityErrorBody>().await {
            Ok(body) => IdentityMapper::to_provider_error(&body.error.message),
            Err(e) => ProviderError::new(
                "auth/internal-error",
                format!("Unreadable identity error response: {}", e),
            ),
        }
    }
}

#[async_trait]
impl IdentityRepository for FirebaseAuthClient {
    async fn sign_in_with_popup(
        &self,
        provider: OAuthPopupProvider,
    ) -> Result<AuthSession, ProviderError> {
        // Popups need a browser shell; the web front end supplies its own
        // implementation of this seam.
        Err(ProviderError::new(
            "auth/operation-not-supported-in-this-environment",
            format!(
                "The {} popup flow is only available inside the browser shell.",
                provider.provider_id()
            ),
        ))
    }

    async fn sign_in_with_email_and_password(
        &self,
        credentials: EmailCredentials,
    ) -> Result<AuthSession, ProviderError> {
        debug!("password sign-in requested");

        let body = PasswordAccountRequest {
            email: credentials.email,
            password: credentials.password,
            return_secure_token: true,
        };
        self.post_account("signInWithPassword", &body)
            .await
            .map(IdentityMapper::to_session)
    }

    async fn create_user_with_email_and_password(
        &self,
        credentials: EmailCredentials,
    ) -> Result<AuthSession, ProviderError> {
        debug!("account creation requested");

        let body = PasswordAccountRequest {
            email: credentials.email,
            password: credentials.password,
            return_secure_token: true,
        };
        self.post_account("signUp", &body)
            .await
            .map(IdentityMapper::to_session)
    }

    async fn update_profile(
        &self,
        session: AuthSession,
        update: ProfileUpdate,
    ) -> Result<(), ProviderError> {
        debug!("profile update requested for {}", session.uid);

        let body = UpdateAccountRequest {
            id_token: session.id_token,
            display_name: update.display_name,
            photo_url: update.photo_url,
            return_secure_token: false,
        };
        self.send("update", &body).await.map(|_| ())
    }
}
