use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::Mutex;

use crate::modules::auth::domain::{
    AuthSession, ErrorInfo, IdentityRepository, LoginForm, OAuthPopupProvider, ProfileRepository,
    ProfileUpdate, SignupForm, UserProfileSeed,
};
use crate::modules::auth::infrastructure::{FirebaseAuthClient, FirestoreClient};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::FormValidator;

/// Avatar assigned to every freshly created account.
pub const FALLBACK_AVATAR_URL: &str = "/profile_fallback.jpg";

/// Which form the auth panel currently presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Result of a single auth attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    SignedIn(AuthSession),
    Failed(ErrorInfo),
}

/// Snapshot of the panel state for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUiState {
    pub mode: AuthMode,
    pub busy: bool,
    pub error: Option<ErrorInfo>,
}

#[derive(Debug)]
struct PanelState {
    mode: AuthMode,
    error: Option<ErrorInfo>,
}

/// Controller for the login/signup panel.
///
/// Validates form input locally, delegates credential verification and
/// account creation to the identity collaborator, and seeds the profile
/// document on successful signup. Holds the single current `ErrorInfo`
/// and the busy flag that keeps one submit in flight at a time.
pub struct AuthService {
    identity: Arc<dyn IdentityRepository>,
    profiles: Arc<dyn ProfileRepository>,
    panel: Mutex<PanelState>,
    busy: AtomicBool,
}

/// Clears the busy flag when a submit settles, success or failure.
struct SubmitSlot<'a> {
    busy: &'a AtomicBool,
}

impl Drop for SubmitSlot<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self {
            identity,
            profiles,
            panel: Mutex::new(PanelState {
                mode: AuthMode::Login,
                error: None,
            }),
            busy: AtomicBool::new(false),
        }
    }

    /// Wire up the real identity and document-store clients.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let identity = Arc::new(FirebaseAuthClient::new(config)?);
        let profiles = Arc::new(FirestoreClient::new(config)?);
        Ok(Self::new(identity, profiles))
    }

    /// Verify credentials for an existing account.
    ///
    /// Field constraints are checked before any network call. A provider
    /// rejection with `auth/invalid-credential` is shown with a fixed
    /// message; any other code is shown verbatim.
    pub async fn submit_login(&self, form: LoginForm) -> AppResult<AuthOutcome> {
        let _slot = self.acquire_submit_slot()?;

        if let Err(err) = Self::check_login_fields(&form) {
            return Ok(self.fail(ErrorInfo::validation(validation_message(err))).await);
        }

        match self
            .identity
            .sign_in_with_email_and_password(form.credentials())
            .await
        {
            Ok(session) => {
                self.clear_error().await;
                Ok(AuthOutcome::SignedIn(session))
            }
            Err(err) => {
                debug!("login rejected by identity provider: {}", err.code);
                Ok(self.fail(ErrorInfo::from_login_failure(err)).await)
            }
        }
    }

    /// Create an account, seed its profile document, then set its display
    /// name and fallback avatar.
    ///
    /// A password/confirmation mismatch fails locally without contacting any
    /// collaborator. Steps already completed before a failing step are not
    /// rolled back.
    pub async fn submit_signup(&self, form: SignupForm) -> AppResult<AuthOutcome> {
        let _slot = self.acquire_submit_slot()?;

        if let Err(err) = Self::check_signup_fields(&form) {
            return Ok(self.fail(ErrorInfo::validation(validation_message(err))).await);
        }

        if !form.passwords_match() {
            return Ok(self.fail(ErrorInfo::password_mismatch()).await);
        }

        let session = match self
            .identity
            .create_user_with_email_and_password(form.credentials())
            .await
        {
            Ok(session) => session,
            Err(err) => {
                warn!("account creation failed: {}", err.code);
                return Ok(self.fail(err.into()).await);
            }
        };

        if let Err(err) = self
            .profiles
            .write_profile_seed(session.clone(), UserProfileSeed::default())
            .await
        {
            warn!("profile seed write failed for {}: {}", session.uid, err.code);
            return Ok(self.fail(err.into()).await);
        }

        // Display name keeps the username exactly as typed, untrimmed.
        let update = ProfileUpdate {
            display_name: form.username.clone(),
            photo_url: FALLBACK_AVATAR_URL.to_string(),
        };
        if let Err(err) = self.identity.update_profile(session.clone(), update).await {
            warn!("profile update failed for {}: {}", session.uid, err.code);
            return Ok(self.fail(err.into()).await);
        }

        self.clear_error().await;
        Ok(AuthOutcome::SignedIn(session))
    }

    pub async fn sign_in_with_google(&self) -> AuthOutcome {
        self.popup_sign_in(OAuthPopupProvider::Google).await
    }

    pub async fn sign_in_with_github(&self) -> AuthOutcome {
        self.popup_sign_in(OAuthPopupProvider::Github).await
    }

    async fn popup_sign_in(&self, provider: OAuthPopupProvider) -> AuthOutcome {
        match self.identity.sign_in_with_popup(provider).await {
            Ok(session) => {
                self.clear_error().await;
                AuthOutcome::SignedIn(session)
            }
            Err(err) => {
                warn!("popup sign-in via {:?} failed: {}", provider, err.code);
                self.fail(err.into()).await
            }
        }
    }

    /// Flip between the login and signup presentations. The current error,
    /// if any, stays visible until the next field edit or submit.
    pub async fn toggle_mode(&self) {
        let mut panel = self.panel.lock().await;
        panel.mode = panel.mode.toggled();
    }

    /// Any input edit clears the current error.
    pub async fn field_changed(&self) {
        self.clear_error().await;
    }

    pub async fn snapshot(&self) -> AuthUiState {
        let panel = self.panel.lock().await;
        AuthUiState {
            mode: panel.mode,
            busy: self.busy.load(Ordering::SeqCst),
            error: panel.error.clone(),
        }
    }

    fn acquire_submit_slot(&self) -> AppResult<SubmitSlot<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| {
                AppError::InvalidOperation("another submit is already in flight".to_string())
            })?;
        Ok(SubmitSlot { busy: &self.busy })
    }

    async fn fail(&self, info: ErrorInfo) -> AuthOutcome {
        self.panel.lock().await.error = Some(info.clone());
        AuthOutcome::Failed(info)
    }

    async fn clear_error(&self) {
        self.panel.lock().await.error = None;
    }

    fn check_login_fields(form: &LoginForm) -> Result<(), AppError> {
        FormValidator::validate_email(&form.email)?;
        FormValidator::validate_password(&form.password)?;
        Ok(())
    }

    fn check_signup_fields(form: &SignupForm) -> Result<(), AppError> {
        FormValidator::validate_username(&form.username)?;
        FormValidator::validate_email(&form.email)?;
        FormValidator::validate_password(&form.password)?;
        FormValidator::validate_password(&form.confirm_password)?;
        Ok(())
    }
}

fn validation_message(err: AppError) -> String {
    match err {
        AppError::ValidationError(message) => message,
        other => other.to_string(),
    }
}
