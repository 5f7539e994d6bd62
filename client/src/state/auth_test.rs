use super::*;

// =============================================================
// sign_in_error_message
// =============================================================

#[test]
fn authentication_failure_shows_generic_message() {
    assert_eq!(
        sign_in_error_message(SignInError::AuthenticationFailed).as_deref(),
        Some("incorrect email or password")
    );
}

#[test]
fn superseded_attempt_shows_nothing() {
    assert_eq!(sign_in_error_message(SignInError::Superseded), None);
    assert_eq!(sign_in_error_message(SignInError::AlreadySignedIn), None);
}

#[test]
fn storage_failure_is_reported() {
    assert!(sign_in_error_message(SignInError::StorageUnavailable).is_some());
}

// =============================================================
// credentials_from_input
// =============================================================

#[test]
fn credentials_trim_email_but_not_password() {
    let creds = credentials_from_input("  ada@example.com ", " pw ").unwrap();
    assert_eq!(creds.email, "ada@example.com");
    assert_eq!(creds.password, " pw ");
}

#[test]
fn credentials_require_both_fields() {
    assert_eq!(
        credentials_from_input("   ", "pw").unwrap_err(),
        "Enter your email and password."
    );
    assert!(credentials_from_input("a@b.com", "").is_err());
}
