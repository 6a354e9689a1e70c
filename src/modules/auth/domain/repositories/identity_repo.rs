use async_trait::async_trait;

use crate::{
    modules::auth::domain::{
        credentials::EmailCredentials,
        session::{AuthSession, OAuthPopupProvider, ProfileUpdate},
    },
    shared::errors::ProviderError,
};

/// Contract for the external identity platform.
///
/// Failures carry the provider's `(code, message)` pair; the application
/// layer decides how each code is presented.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Popup-based sign-in for a named OAuth provider.
    async fn sign_in_with_popup(
        &self,
        provider: OAuthPopupProvider,
    ) -> Result<AuthSession, ProviderError>;

    /// Verify an existing account's credentials.
    async fn sign_in_with_email_and_password(
        &self,
        credentials: EmailCredentials,
    ) -> Result<AuthSession, ProviderError>;

    /// Create a new account.
    async fn create_user_with_email_and_password(
        &self,
        credentials: EmailCredentials,
    ) -> Result<AuthSession, ProviderError>;

    /// Set the account's display name and avatar.
    async fn update_profile(
        &self,
        session: AuthSession,
        update: ProfileUpdate,
    ) -> Result<(), ProviderError>;
}
