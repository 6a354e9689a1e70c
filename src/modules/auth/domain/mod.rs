pub mod credentials;
pub mod error_info;
pub mod profile_seed;
pub mod repositories;
pub mod session;

// Re-exports for easy access
pub use credentials::{EmailCredentials, LoginForm, SignupForm};
pub use error_info::ErrorInfo;
pub use profile_seed::UserProfileSeed;
pub use repositories::{IdentityRepository, ProfileRepository};
pub use session::{AuthSession, OAuthPopupProvider, ProfileUpdate};
