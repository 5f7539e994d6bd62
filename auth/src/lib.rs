//! Client-side authentication gate for the EventX front-ends.
//!
//! This crate owns the session model shared by `client` (browser) and `cli`
//! (terminal): the [`Session`] snapshot, the [`SessionStore`] that seeds it
//! from durable storage and mutates it on sign-in/sign-out, and the route
//! guard that maps a session plus a required [`Tier`] to a render/redirect
//! [`Decision`].
//!
//! It performs no I/O of its own. Durable storage is reached through the
//! [`Storage`] trait and the authentication endpoint through
//! [`Authenticator`], so each front-end supplies its own transport.

pub mod authenticator;
pub mod error;
pub mod guard;
pub mod session;
pub mod storage;
pub mod store;

pub use authenticator::{AuthResponse, Authenticator, Credentials, SIGNIN_PATH};
pub use error::{AuthError, SignInError, StorageError};
pub use guard::{Decision, Destination, Tier, authorized_token, decide};
pub use session::{AccessState, Role, Session};
pub use storage::{MemoryStorage, ROLE_KEY, Storage, TOKEN_KEY};
pub use store::{SessionStore, SignInAttempt};
