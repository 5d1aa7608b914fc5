use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::theme::ThemePreference;

/// Application configuration loaded from environment variables.
/// Startup fails with a named error if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the upstream CV JSON document. Fetched exactly once per process.
    pub cv_data_url: String,
    /// Path of the JSON state file holding the persisted theme preference.
    pub theme_state_path: PathBuf,
    /// Platform color-scheme signal, consulted only when no preference is persisted.
    pub system_color_scheme: ThemePreference,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cv_data_url: require_env("CV_DATA_URL")?,
            theme_state_path: std::env::var("THEME_STATE_PATH")
                .unwrap_or_else(|_| "vitrine-theme.json".to_string())
                .into(),
            system_color_scheme: std::env::var("SYSTEM_COLOR_SCHEME")
                .unwrap_or_else(|_| "light".to_string())
                .parse()
                .context("SYSTEM_COLOR_SCHEME must be 'light' or 'dark'")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
