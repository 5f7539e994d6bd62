use super::*;

#[test]
fn auth_response_reads_camel_case_admin_flag() {
    let parsed: AuthResponse = serde_json::from_str(r#"{"token":"T","isAdmin":true}"#).unwrap();
    assert_eq!(
        parsed,
        AuthResponse {
            token: "T".to_owned(),
            is_admin: true
        }
    );
}

#[test]
fn auth_response_missing_admin_flag_defaults_false() {
    let parsed: AuthResponse = serde_json::from_str(r#"{"token":"T"}"#).unwrap();
    assert!(!parsed.is_admin);
}

#[test]
fn auth_response_without_token_is_rejected() {
    assert!(serde_json::from_str::<AuthResponse>(r#"{"isAdmin":true}"#).is_err());
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let json = serde_json::to_value(Credentials::new("a@b.com", "pw")).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn credentials_debug_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("a@b.com", "hunter2"));
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}
