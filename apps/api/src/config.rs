use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Explicit Chromium binary; chromiumoxide searches the usual locations when unset.
    pub chrome_executable: Option<PathBuf>,
    pub fallback: ExternalServiceConfig,
    pub render: RenderTimeouts,
}

/// Third-party HTML-to-PDF service used when the local browser fails.
#[derive(Debug, Clone, Default)]
pub struct ExternalServiceConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

/// Upper bounds for every wait inside a browser export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTimeouts {
    pub launch: Duration,
    pub network_idle: Duration,
    pub ready_state: Duration,
    pub fonts: Duration,
    pub images: Duration,
    pub per_image: Duration,
    /// Fixed pause after readiness so late layout work can land.
    pub settle: Duration,
    pub capture: Duration,
}

impl Default for RenderTimeouts {
    fn default() -> Self {
        Self {
            launch: Duration::from_millis(20_000),
            network_idle: Duration::from_millis(10_000),
            ready_state: Duration::from_millis(5_000),
            fonts: Duration::from_millis(5_000),
            images: Duration::from_millis(10_000),
            per_image: Duration::from_millis(3_000),
            settle: Duration::from_millis(250),
            capture: Duration::from_millis(30_000),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = RenderTimeouts::default();
        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            chrome_executable: optional_env("CHROME_EXECUTABLE").map(PathBuf::from),
            fallback: ExternalServiceConfig {
                url: optional_env("PDF_FALLBACK_URL"),
                api_key: optional_env("PDF_FALLBACK_API_KEY"),
                timeout: Duration::from_secs(parse_env("PDF_FALLBACK_TIMEOUT_SECS", 60)?),
            },
            render: RenderTimeouts {
                launch: millis_env("RENDER_LAUNCH_TIMEOUT_MS", defaults.launch)?,
                network_idle: millis_env("RENDER_NETWORK_IDLE_MS", defaults.network_idle)?,
                ready_state: millis_env("RENDER_READY_STATE_MS", defaults.ready_state)?,
                fonts: millis_env("RENDER_FONTS_MS", defaults.fonts)?,
                images: millis_env("RENDER_IMAGES_MS", defaults.images)?,
                per_image: millis_env("RENDER_PER_IMAGE_MS", defaults.per_image)?,
                settle: millis_env("RENDER_SETTLE_MS", defaults.settle)?,
                capture: millis_env("RENDER_CAPTURE_MS", defaults.capture)?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

fn millis_env(key: &str, default: Duration) -> Result<Duration> {
    let ms = parse_env(key, default.as_millis() as u64)?;
    Ok(Duration::from_millis(ms))
}
