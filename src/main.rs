//! Elidune Kiosk - console front desk
//!
//! Runs one desk session on stdin/stdout.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elidune_kiosk::{
    config::{AppConfig, LoggingConfig},
    console::ConsoleFrontend,
    services::CredentialStore,
    session::{SessionFlow, SessionSettings},
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Elidune Kiosk v{}", env!("CARGO_PKG_VERSION"));

    let credentials = CredentialStore::load_or_empty(&config.credentials.path);
    let mut session = SessionFlow::new(
        ConsoleFrontend::stdio(),
        credentials,
        SessionSettings::from(&config),
    );
    session.run().context("Console session failed")?;

    tracing::info!(outcome = ?session.outcome(), "Session finished");
    Ok(())
}

/// Logs go to stderr so they stay out of the prompts
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("elidune_kiosk={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
