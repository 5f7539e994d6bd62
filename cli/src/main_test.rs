use super::*;
use async_trait::async_trait;
use auth::{AuthError, AuthResponse, MemoryStorage, ROLE_KEY, Role, TOKEN_KEY};

fn store_with(items: &[(&'static str, &'static str)]) -> SessionStore<MemoryStorage> {
    SessionStore::initialize(MemoryStorage::with_items(items.iter().copied()))
}

// =============================================================
// Guard checks
// =============================================================

#[test]
fn data_commands_require_a_session() {
    let store = store_with(&[]);
    assert!(matches!(require(&store, Tier::Authenticated), Err(CliError::SignInRequired)));
    assert!(matches!(require(&store, Tier::Admin), Err(CliError::SignInRequired)));
}

#[test]
fn user_gets_token_but_not_admin_commands() {
    let store = store_with(&[(TOKEN_KEY, "u-token"), (ROLE_KEY, "User")]);
    assert_eq!(require(&store, Tier::Authenticated).unwrap(), "u-token");
    assert!(matches!(require(&store, Tier::Admin), Err(CliError::AdminRequired)));
}

#[test]
fn admin_passes_both_tiers() {
    let store = store_with(&[(TOKEN_KEY, "a-token"), (ROLE_KEY, "Admin")]);
    assert_eq!(require(&store, Tier::Authenticated).unwrap(), "a-token");
    assert_eq!(require(&store, Tier::Admin).unwrap(), "a-token");
}

#[test]
fn command_tiers() {
    assert_eq!(Command::Whoami.tier(), None);
    assert_eq!(Command::Events.tier(), Some(Tier::Authenticated));
    assert_eq!(Command::Buy { event_id: "e1".to_owned() }.tier(), Some(Tier::Authenticated));
    assert_eq!(Command::Analytics.tier(), Some(Tier::Admin));
}

// =============================================================
// Sign-in replacing a session
// =============================================================

struct Fixed(Result<AuthResponse, AuthError>);

#[async_trait(?Send)]
impl Authenticator for Fixed {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        self.0.clone()
    }
}

fn credentials() -> Credentials {
    Credentials::new("a@b.c", "pw")
}

#[tokio::test]
async fn failed_sign_in_keeps_existing_session() {
    let mut store = store_with(&[(TOKEN_KEY, "old-token"), (ROLE_KEY, "Admin")]);
    let before = store.session().clone();

    let result = sign_in(&mut store, &Fixed(Err(AuthError::Transport("down".to_owned()))), &credentials()).await;

    assert!(matches!(result, Err(CliError::SignIn(SignInError::AuthenticationFailed))));
    assert_eq!(store.session(), &before);
    assert_eq!(store.storage().get_item(TOKEN_KEY).unwrap().as_deref(), Some("old-token"));
    assert_eq!(store.storage().get_item(ROLE_KEY).unwrap().as_deref(), Some("Admin"));
}

#[tokio::test]
async fn empty_token_keeps_existing_session() {
    let mut store = store_with(&[(TOKEN_KEY, "old-token"), (ROLE_KEY, "User")]);
    let response = AuthResponse {
        token: String::new(),
        is_admin: true,
    };

    let result = sign_in(&mut store, &Fixed(Ok(response)), &credentials()).await;

    assert!(result.is_err());
    assert_eq!(store.session().token(), Some("old-token"));
}

#[tokio::test]
async fn accepted_sign_in_replaces_existing_session() {
    let mut store = store_with(&[(TOKEN_KEY, "old-token"), (ROLE_KEY, "Admin")]);
    let response = AuthResponse {
        token: "new-token".to_owned(),
        is_admin: false,
    };

    let session = sign_in(&mut store, &Fixed(Ok(response)), &credentials()).await.unwrap();

    assert_eq!(session, Session::signed_in("new-token", Role::User));
    assert_eq!(store.storage().get_item(TOKEN_KEY).unwrap().as_deref(), Some("new-token"));
    assert_eq!(store.storage().get_item(ROLE_KEY).unwrap().as_deref(), Some("User"));
}

#[tokio::test]
async fn sign_in_from_signed_out_commits() {
    let mut store = store_with(&[]);
    let response = AuthResponse {
        token: "t".to_owned(),
        is_admin: true,
    };
    let session = sign_in(&mut store, &Fixed(Ok(response)), &credentials()).await.unwrap();
    assert!(session.is_admin());
}

// =============================================================
// Expired token
// =============================================================

#[test]
fn unauthorized_response_signs_out() {
    let mut store = store_with(&[(TOKEN_KEY, "u-token"), (ROLE_KEY, "User")]);
    let error = observe(&mut store, "u-token", HttpError::Unauthorized);
    assert!(matches!(error, CliError::Expired));
    assert!(!store.session().is_logged_in());
    assert_eq!(store.storage().get_item(TOKEN_KEY), Ok(None));
}

#[test]
fn other_failures_keep_the_session() {
    let mut store = store_with(&[(TOKEN_KEY, "u-token"), (ROLE_KEY, "User")]);
    let error = observe(
        &mut store,
        "u-token",
        HttpError::Status {
            status: 500,
            message: "boom".to_owned(),
        },
    );
    assert!(matches!(error, CliError::Http(_)));
    assert!(store.session().is_logged_in());
}

#[test]
fn cli_parses_signin_arguments() {
    let cli = Cli::try_parse_from(["eventx", "signin", "--email", "a@b.c", "--password", "pw"]).unwrap();
    assert!(matches!(cli.command, Command::Signin { ref email, .. } if email == "a@b.c"));
}
