use crate::modules::auth::domain::AuthSession;
use crate::shared::errors::ProviderError;

use super::dto::AccountResponse;

pub struct IdentityMapper;

impl IdentityMapper {
    pub fn to_session(response: AccountResponse) -> AuthSession {
        AuthSession {
            uid: response.local_id,
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            email: response.email,
            display_name: response.display_name,
            photo_url: response.photo_url,
        }
    }

    /// Translate a REST error token into the canonical `auth/*` code the UI
    /// displays. The raw message may carry a description after the token
    /// (e.g. `"WEAK_PASSWORD : Password should be at least 6 characters"`),
    /// so only the leading token is matched.
    pub fn to_provider_error(raw_message: &str) -> ProviderError {
        let token = raw_message
            .split([' ', ':'])
            .next()
            .unwrap_or(raw_message);

        let (code, message) = match token {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => (
                "auth/invalid-credential",
                "The supplied auth credential is incorrect, malformed or has expired.",
            ),
            "EMAIL_EXISTS" => (
                "auth/email-already-in-use",
                "The email address is already in use by another account.",
            ),
            "INVALID_EMAIL" => ("auth/invalid-email", "The email address is badly formatted."),
            "WEAK_PASSWORD" => (
                "auth/weak-password",
                "Password should be at least 6 characters.",
            ),
            "USER_DISABLED" => (
                "auth/user-disabled",
                "The user account has been disabled by an administrator.",
            ),
            "TOO_MANY_ATTEMPTS_TRY_LATER" => (
                "auth/too-many-requests",
                "Access to this account has been temporarily disabled due to many failed login attempts.",
            ),
            "OPERATION_NOT_ALLOWED" => (
                "auth/operation-not-allowed",
                "The given sign-in provider is disabled for this project.",
            ),
            _ => return ProviderError::new("auth/internal-error", raw_message),
        };

        ProviderError::new(code, message)
    }
}
