#![cfg(not(feature = "csr"))]

use super::*;
use auth::{SessionStore, TOKEN_KEY};

#[test]
fn reads_are_unavailable_outside_browser() {
    assert_eq!(BrowserStorage.get_item(TOKEN_KEY), Err(StorageError::Unavailable));
}

#[test]
fn session_store_starts_signed_out_without_browser() {
    let store = SessionStore::initialize(BrowserStorage);
    assert!(!store.session().is_logged_in());
}

#[test]
fn sign_out_survives_unavailable_storage() {
    let mut store = SessionStore::initialize(BrowserStorage);
    store.sign_out();
    assert!(!store.session().is_logged_in());
}
