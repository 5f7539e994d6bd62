use super::*;
use auth::{ROLE_KEY, TOKEN_KEY};

fn storage_in(dir: &tempfile::TempDir) -> FileStorage {
    FileStorage::new(dir.path().join("session.json"))
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    assert_eq!(storage.get_item(TOKEN_KEY), Ok(None));
}

#[test]
fn values_survive_a_new_handle() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = storage_in(&dir);
    storage.set_item(TOKEN_KEY, "abc").unwrap();
    storage.set_item(ROLE_KEY, "Admin").unwrap();

    let reopened = storage_in(&dir);
    assert_eq!(reopened.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
    assert_eq!(reopened.get_item(ROLE_KEY).unwrap().as_deref(), Some("Admin"));
}

#[test]
fn remove_deletes_only_that_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = storage_in(&dir);
    storage.set_item(TOKEN_KEY, "abc").unwrap();
    storage.set_item(ROLE_KEY, "User").unwrap();
    storage.remove_item(TOKEN_KEY).unwrap();

    assert_eq!(storage.get_item(TOKEN_KEY), Ok(None));
    assert_eq!(storage.get_item(ROLE_KEY).unwrap().as_deref(), Some("User"));
}

#[test]
fn removing_from_missing_file_succeeds_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = storage_in(&dir);
    storage.remove_item(TOKEN_KEY).unwrap();
    assert!(!storage.path().exists());
}

#[test]
fn corrupt_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    std::fs::write(storage.path(), "{not json").unwrap();
    assert!(matches!(storage.get_item(TOKEN_KEY), Err(StorageError::Read { .. })));
}

#[test]
fn unwritable_location_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("missing-dir").join("session.json"));
    assert!(matches!(storage.set_item(TOKEN_KEY, "abc"), Err(StorageError::Write { .. })));
}

#[test]
fn writing_replaces_a_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = storage_in(&dir);
    std::fs::write(storage.path(), "{not json").unwrap();

    storage.set_item(TOKEN_KEY, "abc").unwrap();

    assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
}

#[test]
fn corrupt_file_does_not_lock_out_the_session_store() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    std::fs::write(storage.path(), "{not json").unwrap();

    let mut store = auth::SessionStore::initialize(storage);
    assert!(!store.session().is_logged_in());

    store.sign_out();
    assert_eq!(store.storage().get_item(TOKEN_KEY), Ok(None));

    let attempt = store.begin_sign_in().unwrap();
    let response = auth::AuthResponse {
        token: "fresh".to_owned(),
        is_admin: false,
    };
    store.complete_sign_in(attempt, Ok(response)).unwrap();
    assert_eq!(storage_in(&dir).get_item(TOKEN_KEY).unwrap().as_deref(), Some("fresh"));
}
