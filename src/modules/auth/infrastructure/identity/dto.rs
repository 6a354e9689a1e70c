use serde::{Deserialize, Serialize};

/// Request body shared by the password sign-in and sign-up endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordAccountRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "returnSecureToken")]
    pub return_secure_token: bool,
}

/// Request body for the account update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAccountRequest {
    #[serde(rename = "idToken")]
    pub id_token: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    #[serde(rename = "returnSecureToken")]
    pub return_secure_token: bool,
}

/// Successful response from the account endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResponse {
    #[serde(rename = "localId")]
    pub local_id: String,
    #[serde(rename = "idToken")]
    pub id_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
}

/// Error envelope returned by the identity REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityErrorBody {
    pub error: IdentityErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityErrorDetail {
    pub code: Option<i64>,
    pub message: String,
}
