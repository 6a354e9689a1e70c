pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::{AuthMode, AuthOutcome, AuthService, AuthUiState};
pub use domain::{
    AuthSession, EmailCredentials, ErrorInfo, LoginForm, OAuthPopupProvider, ProfileUpdate,
    SignupForm, UserProfileSeed,
};
pub use domain::{IdentityRepository, ProfileRepository};
