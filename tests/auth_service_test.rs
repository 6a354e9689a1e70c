//! Auth flow controller tests with mocked collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::Sequence;
use tokio::sync::Notify;

use nagare::modules::auth::{
    AuthMode, AuthOutcome, AuthService, AuthSession, EmailCredentials, IdentityRepository,
    LoginForm, OAuthPopupProvider, ProfileRepository, ProfileUpdate, SignupForm, UserProfileSeed,
};
use nagare::shared::errors::{AppError, ProviderError};

mock! {
    Identity {}

    #[async_trait]
    impl IdentityRepository for Identity {
        async fn sign_in_with_popup(
            &self,
            provider: OAuthPopupProvider,
        ) -> Result<AuthSession, ProviderError>;

        async fn sign_in_with_email_and_password(
            &self,
            credentials: EmailCredentials,
        ) -> Result<AuthSession, ProviderError>;

        async fn create_user_with_email_and_password(
            &self,
            credentials: EmailCredentials,
        ) -> Result<AuthSession, ProviderError>;

        async fn update_profile(
            &self,
            session: AuthSession,
            update: ProfileUpdate,
        ) -> Result<(), ProviderError>;
    }
}

mock! {
    Profiles {}

    #[async_trait]
    impl ProfileRepository for Profiles {
        async fn write_profile_seed(
            &self,
            session: AuthSession,
            seed: UserProfileSeed,
        ) -> Result<(), ProviderError>;
    }
}

fn session(uid: &str) -> AuthSession {
    AuthSession {
        uid: uid.to_string(),
        id_token: "id-token".to_string(),
        refresh_token: Some("refresh-token".to_string()),
        email: Some("user@example.com".to_string()),
        display_name: None,
        photo_url: None,
    }
}

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn signup_form(username: &str, password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        username: username.to_string(),
        email: "user@example.com".to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

fn service(identity: MockIdentity, profiles: MockProfiles) -> AuthService {
    AuthService::new(Arc::new(identity), Arc::new(profiles))
}

#[tokio::test]
async fn password_mismatch_fails_without_contacting_collaborators() {
    let mut identity = MockIdentity::new();
    identity.expect_create_user_with_email_and_password().never();
    let mut profiles = MockProfiles::new();
    profiles.expect_write_profile_seed().never();

    let service = service(identity, profiles);
    let outcome = service
        .submit_signup(signup_form("yuki", "abcd1234", "abcd1235"))
        .await
        .unwrap();

    match outcome {
        AuthOutcome::Failed(info) => {
            assert_eq!(info.code, "password");
            assert_eq!(info.message, "Passwords doesn't match.");
        }
        other => panic!("expected failure, got {:?}", other),
    }

    let state = service.snapshot().await;
    assert_eq!(state.error.unwrap().code, "password");
    assert!(!state.busy);
}

#[tokio::test]
async fn signup_runs_create_seed_update_in_order() {
    let mut seq = Sequence::new();
    let mut identity = MockIdentity::new();
    let mut profiles = MockProfiles::new();

    identity
        .expect_create_user_with_email_and_password()
        .withf(|credentials| {
            credentials.email == "user@example.com" && credentials.password == "abcd1234"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(session("uid-1")));

    profiles
        .expect_write_profile_seed()
        .withf(|session, seed| {
            session.uid == "uid-1" && *seed == UserProfileSeed::default()
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));

    identity
        .expect_update_profile()
        .withf(|session, update| {
            session.uid == "uid-1"
                && update.display_name == "yuki"
                && update.photo_url == "/profile_fallback.jpg"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));

    let service = service(identity, profiles);
    let outcome = service
        .submit_signup(signup_form("yuki", " abcd1234 ", "abcd1234"))
        .await
        .unwrap();

    assert!(matches!(outcome, AuthOutcome::SignedIn(_)));
    let state = service.snapshot().await;
    assert!(state.error.is_none());
    assert!(!state.busy);
}

#[tokio::test]
async fn signup_attempts_profile_update_for_blank_display_name() {
    // A whitespace-only username passes the form constraints but trims to
    // nothing; the display-name update must still be attempted, untrimmed.
    let mut identity = MockIdentity::new();
    let mut profiles = MockProfiles::new();

    identity
        .expect_create_user_with_email_and_password()
        .times(1)
        .returning(|_| Ok(session("uid-2")));
    profiles
        .expect_write_profile_seed()
        .times(1)
        .returning(|_, _| Ok(()));
    identity
        .expect_update_profile()
        .withf(|_, update| update.display_name == " ")
        .times(1)
        .returning(|_, _| Ok(()));

    let service = service(identity, profiles);
    let outcome = service
        .submit_signup(signup_form(" ", "abcd1234", "abcd1234"))
        .await
        .unwrap();

    assert!(matches!(outcome, AuthOutcome::SignedIn(_)));
}

#[tokio::test]
async fn failed_seed_write_surfaces_error_and_skips_profile_update() {
    let mut identity = MockIdentity::new();
    let mut profiles = MockProfiles::new();

    identity
        .expect_create_user_with_email_and_password()
        .times(1)
        .returning(|_| Ok(session("uid-3")));
    profiles
        .expect_write_profile_seed()
        .times(1)
        .returning(|_, _| {
            Err(ProviderError::new(
                "permission-denied",
                "Missing or insufficient permissions.",
            ))
        });
    identity.expect_update_profile().never();

    let service = service(identity, profiles);
    let outcome = service
        .submit_signup(signup_form("yuki", "abcd1234", "abcd1234"))
        .await
        .unwrap();

    match outcome {
        AuthOutcome::Failed(info) => {
            assert_eq!(info.code, "permission-denied");
            assert_eq!(info.message, "Missing or insufficient permissions.");
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn login_invalid_credential_gets_fixed_message() {
    let mut identity = MockIdentity::new();
    identity
        .expect_sign_in_with_email_and_password()
        .times(1)
        .returning(|_| {
            Err(ProviderError::new(
                "auth/invalid-credential",
                "The supplied auth credential is incorrect, malformed or has expired.",
            ))
        });

    let service = service(identity, MockProfiles::new());
    let outcome = service
        .submit_login(login_form("user@example.com", "abcd1234"))
        .await
        .unwrap();

    match outcome {
        AuthOutcome::Failed(info) => {
            assert_eq!(info.code, "auth/invalid-credential");
            assert_eq!(info.message, "Check Your Email and Password, then try again.");
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn login_other_codes_pass_through_verbatim() {
    let mut identity = MockIdentity::new();
    identity
        .expect_sign_in_with_email_and_password()
        .times(1)
        .returning(|_| {
            Err(ProviderError::new(
                "auth/user-disabled",
                "The user account has been disabled by an administrator.",
            ))
        });

    let service = service(identity, MockProfiles::new());
    let outcome = service
        .submit_login(login_form("user@example.com", "abcd1234"))
        .await
        .unwrap();

    match outcome {
        AuthOutcome::Failed(info) => {
            assert_eq!(info.code, "auth/user-disabled");
            assert_eq!(
                info.message,
                "The user account has been disabled by an administrator."
            );
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn login_trims_email_and_password() {
    let mut identity = MockIdentity::new();
    identity
        .expect_sign_in_with_email_and_password()
        .withf(|credentials| {
            credentials.email == "user@example.com" && credentials.password == "abcd1234"
        })
        .times(1)
        .returning(|_| Ok(session("uid-4")));

    let service = service(identity, MockProfiles::new());
    let outcome = service
        .submit_login(login_form(" user@example.com ", " abcd1234 "))
        .await
        .unwrap();

    assert!(matches!(outcome, AuthOutcome::SignedIn(_)));
    assert!(service.snapshot().await.error.is_none());
}

#[tokio::test]
async fn invalid_email_blocks_the_network_call() {
    let mut identity = MockIdentity::new();
    identity.expect_sign_in_with_email_and_password().never();

    let service = service(identity, MockProfiles::new());
    let outcome = service
        .submit_login(login_form("not-an-email", "abcd1234"))
        .await
        .unwrap();

    match outcome {
        AuthOutcome::Failed(info) => assert_eq!(info.code, "form"),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn field_change_clears_the_current_error() {
    let service = service(MockIdentity::new(), MockProfiles::new());

    let _ = service
        .submit_signup(signup_form("yuki", "abcd1234", "abcd1235"))
        .await
        .unwrap();
    assert!(service.snapshot().await.error.is_some());

    service.field_changed().await;
    assert!(service.snapshot().await.error.is_none());
}

#[tokio::test]
async fn toggling_mode_keeps_the_current_error() {
    let service = service(MockIdentity::new(), MockProfiles::new());

    let _ = service
        .submit_signup(signup_form("yuki", "abcd1234", "abcd1235"))
        .await
        .unwrap();

    assert_eq!(service.snapshot().await.mode, AuthMode::Login);
    service.toggle_mode().await;

    let state = service.snapshot().await;
    assert_eq!(state.mode, AuthMode::Signup);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn popup_failure_routes_into_error_info() {
    let mut identity = MockIdentity::new();
    identity
        .expect_sign_in_with_popup()
        .times(1)
        .returning(|_| {
            Err(ProviderError::new(
                "auth/popup-closed-by-user",
                "The popup has been closed by the user before finalizing the operation.",
            ))
        });

    let service = service(identity, MockProfiles::new());
    let outcome = service.sign_in_with_google().await;

    match outcome {
        AuthOutcome::Failed(info) => assert_eq!(info.code, "auth/popup-closed-by-user"),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(service.snapshot().await.error.is_some());
}

struct GatedIdentity {
    entered: Arc<Notify>,
    release: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl IdentityRepository for GatedIdentity {
    async fn sign_in_with_popup(
        &self,
        _provider: OAuthPopupProvider,
    ) -> Result<AuthSession, ProviderError> {
        Err(ProviderError::new("unexpected", "not under test"))
    }

    async fn sign_in_with_email_and_password(
        &self,
        _credentials: EmailCredentials,
    ) -> Result<AuthSession, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(session("uid-5"))
    }

    async fn create_user_with_email_and_password(
        &self,
        _credentials: EmailCredentials,
    ) -> Result<AuthSession, ProviderError> {
        Err(ProviderError::new("unexpected", "not under test"))
    }

    async fn update_profile(
        &self,
        _session: AuthSession,
        _update: ProfileUpdate,
    ) -> Result<(), ProviderError> {
        Err(ProviderError::new("unexpected", "not under test"))
    }
}

#[tokio::test]
async fn second_submit_while_busy_is_rejected() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let identity = GatedIdentity {
        entered: Arc::clone(&entered),
        release: Arc::clone(&release),
        calls: Arc::clone(&calls),
    };
    let service = Arc::new(AuthService::new(
        Arc::new(identity),
        Arc::new(MockProfiles::new()),
    ));

    let first = tokio::spawn({
        let service = Arc::clone(&service);
        async move {
            service
                .submit_login(login_form("user@example.com", "abcd1234"))
                .await
        }
    });

    entered.notified().await;
    assert!(service.snapshot().await.busy);

    let second = service
        .submit_login(login_form("user@example.com", "abcd1234"))
        .await;
    assert!(matches!(second, Err(AppError::InvalidOperation(_))));

    release.notify_one();
    let first = first.await.unwrap().unwrap();
    assert!(matches!(first, AuthOutcome::SignedIn(_)));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!service.snapshot().await.busy);
}
