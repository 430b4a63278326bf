//! Credential store: username to password map backed by a flat file

use indexmap::IndexMap;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    repository::CredentialsFile,
};

/// In-memory credentials, loaded at start and flushed back to disk.
///
/// Passwords are kept and compared in plain text, exactly as they appear in
/// the credentials file. This store must not be used for anything that needs
/// real account security.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialStore {
    users: IndexMap<String, String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load credentials from a file; a missing file yields an empty store
    pub fn load(path: &Path) -> AppResult<Self> {
        let mut store = Self::new();
        for (username, password) in CredentialsFile::new(path).read()? {
            store.users.insert(username, password);
        }
        tracing::info!("Loaded {} accounts from {}", store.len(), path.display());
        Ok(store)
    }

    /// Load credentials, falling back to an empty store if the file cannot be read
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(code = e.code() as u32, "Starting with no accounts: {}", e);
            Self::new()
        })
    }

    /// Rewrite the credentials file with every entry
    pub fn save(&self, path: &Path) -> AppResult<()> {
        CredentialsFile::new(path).write(
            self.users
                .iter()
                .map(|(username, password)| (username.as_str(), password.as_str())),
        )?;
        tracing::info!("Saved {} accounts to {}", self.len(), path.display());
        Ok(())
    }

    /// Check a username/password pair against the store
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let valid = self
            .users
            .get(username)
            .is_some_and(|stored| stored == password);
        if valid {
            tracing::info!("User authenticated: {}", username);
        } else {
            tracing::warn!("Authentication failed for user: {}", username);
        }
        valid
    }

    /// Register a new account
    pub fn register(&mut self, username: &str, password: &str) -> AppResult<()> {
        if self.users.contains_key(username) {
            return Err(AppError::DuplicateUser(username.to_string()));
        }
        self.users.insert(username.to_string(), password.to_string());
        tracing::info!("Account created: {}", username);
        Ok(())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
