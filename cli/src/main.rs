//! EventX terminal client.
//!
//! Signs in against the EventX API, keeps the session in a JSON file, and
//! runs the same route-guard checks as the browser front-end before every
//! data command.

mod file_storage;
mod http;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use auth::{Authenticator, Credentials, Decision, Destination, Session, SessionStore, SignInError, Storage, Tier};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::file_storage::FileStorage;
use crate::http::{ApiClient, HttpError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("sign in first")]
    SignInRequired,
    #[error("admin access required")]
    AdminRequired,
    #[error("{0}")]
    SignIn(#[from] SignInError),
    #[error("session expired; sign in again")]
    Expired,
    #[error(transparent)]
    Http(HttpError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "eventx", about = "EventX ticketing terminal client")]
struct Cli {
    #[arg(long, env = "EVENTX_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    #[arg(long, env = "EVENTX_STATE_FILE", default_value = "eventx-session.json")]
    state_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in, replacing any current session.
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long, env = "EVENTX_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Signout,
    /// Print the current access state.
    Whoami,
    Events,
    Tickets,
    Analytics,
    Buy {
        event_id: String,
    },
}

impl Command {
    /// Tier a data command requires, or `None` for session commands.
    fn tier(&self) -> Option<Tier> {
        match self {
            Self::Signin { .. } | Self::Signout | Self::Whoami => None,
            Self::Events | Self::Tickets | Self::Buy { .. } => Some(Tier::Authenticated),
            Self::Analytics => Some(Tier::Admin),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url);
    let mut store = SessionStore::initialize(FileStorage::new(&cli.state_file));

    if let Err(e) = run(&mut store, &api, cli.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run<S: Storage>(store: &mut SessionStore<S>, api: &ApiClient, command: Command) -> Result<(), CliError> {
    let token = match command.tier() {
        Some(tier) => Some(require(store, tier)?),
        None => None,
    };

    match command {
        Command::Signin { email, password } => {
            let session = sign_in(store, api, &Credentials::new(email, password)).await?;
            println!("signed in ({})", session.access().label());
            Ok(())
        }
        Command::Signout => {
            store.sign_out();
            println!("signed out");
            Ok(())
        }
        Command::Whoami => {
            println!("{}", store.session().access().label());
            Ok(())
        }
        Command::Events => fetch(store, api, reqwest::Method::GET, "/admin/event/all", token).await,
        Command::Tickets => fetch(store, api, reqwest::Method::GET, "/user/ticket", token).await,
        Command::Analytics => fetch(store, api, reqwest::Method::GET, "/admin/analytics", token).await,
        Command::Buy { event_id } => {
            let path = format!("/user/event/buy/{event_id}");
            fetch(store, api, reqwest::Method::POST, &path, token).await
        }
    }
}

/// Sign in, replacing any current session only once the new credentials
/// have been accepted. A failed attempt leaves the current session intact.
async fn sign_in<S, A>(store: &mut SessionStore<S>, authenticator: &A, credentials: &Credentials) -> Result<Session, CliError>
where
    S: Storage,
    A: Authenticator + ?Sized,
{
    if !store.session().is_logged_in() {
        return Ok(store.sign_in(authenticator, credentials).await?);
    }

    let response = match authenticator.authenticate(credentials).await {
        Ok(response) if !response.token.is_empty() => response,
        Ok(_) => return Err(SignInError::AuthenticationFailed.into()),
        Err(e) => {
            tracing::info!(error = %e, "sign-in failed; keeping current session");
            return Err(SignInError::AuthenticationFailed.into());
        }
    };
    store.sign_out();
    let attempt = store.begin_sign_in()?;
    Ok(store.complete_sign_in(attempt, Ok(response))?)
}

/// Evaluate the route guard for `tier` and return the bearer token to use.
fn require<S: Storage>(store: &SessionStore<S>, tier: Tier) -> Result<String, CliError> {
    match store.decide(tier) {
        Decision::Render => store
            .session()
            .token()
            .map(str::to_owned)
            .ok_or(CliError::SignInRequired),
        Decision::Redirect(Destination::SignIn) if tier == Tier::Admin && store.session().is_logged_in() => {
            Err(CliError::AdminRequired)
        }
        Decision::Redirect(_) => Err(CliError::SignInRequired),
    }
}

async fn fetch<S: Storage>(
    store: &mut SessionStore<S>,
    api: &ApiClient,
    method: reqwest::Method,
    path: &str,
    token: Option<String>,
) -> Result<(), CliError> {
    let token = token.ok_or(CliError::SignInRequired)?;
    let json = api
        .request(method, path, Some(&token))
        .await
        .map_err(|e| observe(store, &token, e))?;
    print_json(&json)
}

/// Map an API failure, forcing sign-out when the endpoint rejected `token`.
fn observe<S: Storage>(store: &mut SessionStore<S>, token: &str, error: HttpError) -> CliError {
    match error {
        HttpError::Unauthorized => {
            store.expire(token);
            CliError::Expired
        }
        other => CliError::Http(other),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
