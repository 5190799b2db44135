// src/config.rs
use std::env;

use anyhow::{Context, Result};
use log::warn;

use crate::services::sheets::SheetsConfig;

pub const DEFAULT_PORT: u16 = 3030;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub sheets: SheetsConfig,
}

impl AppConfig {
    /// Reads `PORT` and `GOOGLE_SCRIPT_URL` from the process environment.
    /// Call `dotenv().ok()` first to pick up a local `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_values(env::var("PORT").ok(), env::var("GOOGLE_SCRIPT_URL").ok())
    }

    pub fn from_values(port: Option<String>, script_url: Option<String>) -> Result<Self> {
        let port = match port {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got {:?}", value))?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let script_url = script_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        if script_url.is_none() {
            warn!("GOOGLE_SCRIPT_URL not set, submissions will only be logged");
        }

        Ok(AppConfig {
            port,
            sheets: SheetsConfig { script_url },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.sheets.script_url.is_none());
    }

    #[test]
    fn blank_script_url_means_log_only() {
        let config = AppConfig::from_values(Some("8080".into()), Some("   ".into())).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.sheets.script_url.is_none());
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(AppConfig::from_values(Some("web".into()), None).is_err());
    }

    #[test]
    fn keeps_script_url() {
        let config = AppConfig::from_values(None, Some("https://script.google.com/macros/s/abc/exec".into())).unwrap();
        assert_eq!(
            config.sheets.script_url.as_deref(),
            Some("https://script.google.com/macros/s/abc/exec")
        );
    }
}
