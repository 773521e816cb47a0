use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// On-disk document backing the local key-value storage.
    /// `STATE_FILE=` (empty) keeps state in memory only.
    pub state_file: Option<PathBuf>,
    /// Location the session is opened at, as if typed into the address bar.
    pub start_path: String,
    /// Simulated latency of the third-party sign-in mock.
    pub mock_latency: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            state_file: Some(env_or("STATE_FILE", "./data/local-storage.json"))
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            start_path: env_or("START_PATH", "/"),
            mock_latency: Duration::from_millis(
                env_or("MOCK_LATENCY_MS", "1500")
                    .parse::<u64>()
                    .context("MOCK_LATENCY_MS must be a whole number of milliseconds")?,
            ),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
