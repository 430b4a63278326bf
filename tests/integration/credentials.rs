//! Credential store persistence scenarios

use std::fs;

use elidune_kiosk::{services::CredentialStore, AppError};
use tempfile::TempDir;

#[test]
fn test_missing_file_then_register_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("credentials.txt");

    let mut store = CredentialStore::load(&path).unwrap();
    assert!(store.is_empty());

    store.register("carol", "pw1").unwrap();
    store.save(&path).unwrap();

    let reloaded = CredentialStore::load(&path).unwrap();
    assert!(reloaded.authenticate("carol", "pw1"));
    assert!(!reloaded.authenticate("carol", "PW1"));
}

#[test]
fn test_save_keeps_previously_loaded_entries() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("credentials.txt");
    fs::write(&path, "alice:x\nbob:y\n").unwrap();

    let mut store = CredentialStore::load(&path).unwrap();
    store.register("carol", "pw1").unwrap();
    store.save(&path).unwrap();

    let reloaded = CredentialStore::load(&path).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert!(reloaded.authenticate("alice", "x"));
    assert!(reloaded.authenticate("bob", "y"));
    assert!(reloaded.authenticate("carol", "pw1"));
}

#[test]
fn test_duplicate_registration_keeps_first_password() {
    let mut store = CredentialStore::new();
    store.register("alice", "x").unwrap();
    assert!(matches!(store.register("alice", "y"), Err(AppError::DuplicateUser(_))));
    assert!(store.authenticate("alice", "x"));
}

#[test]
fn test_malformed_lines_are_ignored() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("credentials.txt");
    fs::write(&path, "no separator\nalice:x\ntoo:many:fields\n\n").unwrap();

    let store = CredentialStore::load(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.authenticate("alice", "x"));
    assert!(!store.contains("too"));
}
