//! Configuration management for the Elidune kiosk

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CredentialsConfig {
    pub path: PathBuf,
    /// Flush the store right after a successful registration, not only at session end
    pub persist_on_register: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SeedBook {
    pub title: String,
    pub author: String,
}

impl SeedBook {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    pub seed: Vec<SeedBook>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub credentials: CredentialsConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config/` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Load configuration from the given directory, layering the run mode file and environment
    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, ConfigError> {
        let default_file = dir.join("default");
        let mode_file = dir.join(run_mode);

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&mode_file.to_string_lossy()).required(false))
            // Add environment variables (e.g. KIOSK__LOGGING__LEVEL)
            .add_source(
                Environment::with_prefix("KIOSK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override credential file from CREDENTIALS_FILE env var if present
            .set_override_option("credentials.path", env::var("CREDENTIALS_FILE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("credentials.txt"),
            persist_on_register: true,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                SeedBook::new("The Lord of the Rings", "J.R.R. Tolkien"),
                SeedBook::new("Harry Potter and the Sorcerer's Stone", "J.K. Rowling"),
                SeedBook::new("The Hunger Games", "Suzanne Collins"),
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
