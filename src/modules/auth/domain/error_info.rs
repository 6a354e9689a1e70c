use serde::{Deserialize, Serialize};

use crate::shared::errors::ProviderError;

/// Provider code emitted for a rejected email/password sign-in.
pub const INVALID_CREDENTIAL_CODE: &str = "auth/invalid-credential";

/// Fixed replacement message shown for `auth/invalid-credential` on login.
pub const INVALID_CREDENTIAL_MESSAGE: &str = "Check Your Email and Password, then try again.";

/// Displayable failure rendered inline next to the auth form.
///
/// Stays set until the next field edit or submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Synthetic failure for a signup whose password fields differ.
    /// Never reaches the identity collaborator.
    pub fn password_mismatch() -> Self {
        Self::new("password", "Passwords doesn't match.")
    }

    /// Local form-constraint violation, surfaced before any network call.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("form", message)
    }

    /// Failure shape for a rejected login. `auth/invalid-credential` gets a
    /// fixed user-facing message; every other code passes through verbatim.
    pub fn from_login_failure(err: ProviderError) -> Self {
        if err.code == INVALID_CREDENTIAL_CODE {
            Self::new(err.code, INVALID_CREDENTIAL_MESSAGE)
        } else {
            err.into()
        }
    }
}

impl From<ProviderError> for ErrorInfo {
    fn from(err: ProviderError) -> Self {
        Self {
            code: err.code,
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credential_is_remapped_on_login() {
        let err = ProviderError::new(INVALID_CREDENTIAL_CODE, "raw provider text");
        let info = ErrorInfo::from_login_failure(err);
        assert_eq!(info.code, INVALID_CREDENTIAL_CODE);
        assert_eq!(info.message, INVALID_CREDENTIAL_MESSAGE);
    }

    #[test]
    fn other_codes_pass_through_verbatim() {
        let err = ProviderError::new("auth/user-disabled", "The user account has been disabled.");
        let info = ErrorInfo::from_login_failure(err);
        assert_eq!(info.code, "auth/user-disabled");
        assert_eq!(info.message, "The user account has been disabled.");
    }

    #[test]
    fn password_mismatch_shape() {
        let info = ErrorInfo::password_mismatch();
        assert_eq!(info.code, "password");
        assert_eq!(info.message, "Passwords doesn't match.");
    }
}
