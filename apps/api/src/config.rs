use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_API_BASE;

/// Application configuration loaded from environment variables.
///
/// The Gemini key is optional at startup: without it the service still runs and
/// every report request answers with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub gemini_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("GOOGLE_API_KEY")),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            gemini_timeout_secs: parse_timeout_secs(optional_env("GEMINI_TIMEOUT_SECS").as_deref())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Gemini client timeout in seconds; defaults to 120 and must be positive.
fn parse_timeout_secs(value: Option<&str>) -> Result<u64> {
    let secs = value
        .unwrap_or("120")
        .parse::<u64>()
        .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("GEMINI_TIMEOUT_SECS must be greater than zero");
    }
    Ok(secs)
}

/// A set, non-blank environment variable.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
