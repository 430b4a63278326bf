//! Credentials file repository
//!
//! Credentials are stored as one `username:password` record per line. Fields
//! are not escaped, so a colon inside a username or password makes the record
//! unreadable on the next load. A save rewrites the whole file; a crash in the
//! middle of a save may leave it truncated.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::AppResult;

const FIELD_SEPARATOR: char = ':';

#[derive(Debug, Clone)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read all well-formed records. A missing file reads as empty.
    pub fn read(&self) -> AppResult<Vec<(String, String)>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No credentials file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            match parse_line(line) {
                Some((username, password)) => {
                    records.push((username.to_string(), password.to_string()))
                }
                None => tracing::debug!("Skipping malformed credentials line {}", number + 1),
            }
        }
        Ok(records)
    }

    /// Rewrite the file with the given records
    pub fn write<'a, I>(&self, records: I) -> AppResult<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let contents: String = records
            .into_iter()
            .map(|(username, password)| format_line(username, password))
            .collect();
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Split a record into exactly two fields
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split(FIELD_SEPARATOR);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(username), Some(password), None) => Some((username, password)),
        _ => None,
    }
}

fn format_line(username: &str, password: &str) -> String {
    format!("{}{}{}\n", username, FIELD_SEPARATOR, password)
}
