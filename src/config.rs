use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Client configuration, sourced from the environment.
///
/// Recognized variables: `NEXUS_URL`, `NEXUS_USERNAME`, `NEXUS_PASSWORD`,
/// `NEXUS_VERIFY_SSL`, `NEXUS_TIMEOUT` (seconds), `NEXUS_DATABASE_PATH`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify_ssl: bool,
    pub timeout_secs: u64,
    /// Where the mirror writes its SQLite database.
    pub database_path: PathBuf,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("NEXUS_URL").unwrap_or_else(|_| "http://localhost:8081".to_string());
        let username = env::var("NEXUS_USERNAME").ok();
        let password = env::var("NEXUS_PASSWORD").ok();

        let verify_ssl = match env::var("NEXUS_VERIFY_SSL") {
            Ok(raw) => parse_bool(&raw)
                .ok_or_else(|| Error::Config(format!("NEXUS_VERIFY_SSL: invalid value '{raw}'")))?,
            Err(_) => true,
        };

        let timeout_secs = match env::var("NEXUS_TIMEOUT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("NEXUS_TIMEOUT: invalid value '{raw}'")))?,
            Err(_) => 30,
        };

        let database_path = env::var("NEXUS_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("nexus_data.db"));

        Ok(Self {
            base_url,
            username,
            password,
            verify_ssl,
            timeout_secs,
            database_path,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            username: None,
            password: None,
            verify_ssl: true,
            timeout_secs: 30,
            database_path: PathBuf::from("nexus_data.db"),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
