use serde::{Deserialize, Serialize};

/// Authenticated identity returned by the provider. The tokens are opaque;
/// the UI never inspects them beyond passing them back to collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub uid: String,
    pub id_token: String,
    pub refresh_token: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Named provider for the popup-based sign-in flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthPopupProvider {
    Google,
    Github,
}

impl OAuthPopupProvider {
    /// Identity-platform provider id, e.g. for an IdP token exchange.
    pub fn provider_id(&self) -> &'static str {
        match self {
            OAuthPopupProvider::Google => "google.com",
            OAuthPopupProvider::Github => "github.com",
        }
    }
}

/// Display-name/avatar update applied to a freshly created account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub photo_url: String,
}
