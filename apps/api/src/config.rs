use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_SESSIONS: usize = 1024;
/// Default ceiling on decompressed document parts, as a multiple of the upload limit.
const DEFAULT_INFLATE_RATIO: usize = 16;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub admin_password: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Largest size a compressed document part may inflate to during extraction.
    pub max_inflated_bytes: usize,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_bytes = parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Config {
            admin_password: require_env("ADMIN_PASSWORD")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes,
            max_inflated_bytes: parse_env(
                "MAX_INFLATED_BYTES",
                default_inflated_limit(max_upload_bytes),
            )?,
            max_sessions: parse_env("MAX_SESSIONS", DEFAULT_MAX_SESSIONS)?,
        })
    }
}

fn default_inflated_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes.saturating_mul(DEFAULT_INFLATE_RATIO)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or_default(key, std::env::var(key).ok().as_deref(), default)
}

fn parse_or_default<T>(key: &str, raw: Option<&str>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{value}'")),
        None => Ok(default),
    }
}
