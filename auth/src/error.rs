//! Error types for storage access, authentication transport, and sign-in.
//!
//! ERROR HANDLING
//! ==============
//! `StorageError` and `AuthError` describe what went wrong at a boundary.
//! Neither reaches the user directly: the store folds them into
//! `SignInError`, whose messages are safe to show.

/// Failure reported by a [`crate::Storage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (no window, private mode, missing file system).
    #[error("durable storage is unavailable")]
    Unavailable,
    /// Reading a key failed or produced a value that could not be decoded.
    #[error("storage read failed for `{key}`: {message}")]
    Read { key: String, message: String },
    /// Writing or removing a key failed.
    #[error("storage write failed for `{key}`: {message}")]
    Write { key: String, message: String },
}

/// Failure reported by an [`crate::Authenticator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("authentication transport failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("authentication rejected with status {0}")]
    Rejected(u16),
    /// The endpoint answered 2xx but the body was not a valid auth response.
    #[error("malformed authentication response: {0}")]
    Malformed(String),
}

/// Outcome of a sign-in that did not change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    /// Bad credentials or any transport failure. Deliberately indistinguishable.
    #[error("incorrect email or password")]
    AuthenticationFailed,
    /// A newer sign-in or a sign-out committed while this attempt was in flight.
    #[error("sign-in superseded by a newer session change")]
    Superseded,
    /// Sign-in requires a signed-out session.
    #[error("already signed in; sign out first")]
    AlreadySignedIn,
    /// The credentials were accepted but could not be saved on this device.
    #[error("could not save the session on this device")]
    StorageUnavailable,
}
