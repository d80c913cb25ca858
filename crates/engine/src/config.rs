//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind the HTTP server to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,

    /// Where screens are stored
    pub storage: StorageBackend,
    /// SQLite database path (if using the sqlite backend)
    pub sqlite_path: String,

    /// CORS allowed origins (comma-separated, or "*" for any). Empty disables CORS.
    pub cors_allowed_origins: Vec<String>,
}

/// Screen storage backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => anyhow::bail!("unknown storage backend {other:?} (expected memory or sqlite)"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: var("SERVER_PORT")
                .or_else(|| var("PORT"))
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            storage: var("STORAGE_BACKEND")
                .unwrap_or_else(|| "memory".to_string())
                .parse()
                .context("STORAGE_BACKEND is invalid")?,
            sqlite_path: var("SQLITE_PATH").unwrap_or_else(|| "./data/screens.db".to_string()),

            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}
