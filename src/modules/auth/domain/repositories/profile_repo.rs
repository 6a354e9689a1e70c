use async_trait::async_trait;

use crate::{
    modules::auth::domain::{profile_seed::UserProfileSeed, session::AuthSession},
    shared::errors::ProviderError,
};

/// Contract for the external document store holding user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Write the initial profile document, keyed by the account's uid under
    /// the `users` collection. Fire-and-forget from the caller's view; the
    /// store owns the document afterwards.
    async fn write_profile_seed(
        &self,
        session: AuthSession,
        seed: UserProfileSeed,
    ) -> Result<(), ProviderError>;
}
