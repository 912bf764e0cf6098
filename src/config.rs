use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Remote API
    pub base_url: String,
    pub timeout_secs: u64,

    // Device storage
    pub storage_dir: PathBuf,

    // Localization
    pub default_language: String,
    pub debug_translations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Remote API
            base_url: std::env::var("LEDAT_API_BASE_URL")
                .context("LEDAT_API_BASE_URL not set")?,
            timeout_secs: std::env::var("LEDAT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            // Device storage
            storage_dir: std::env::var("LEDAT_STORAGE_DIR")
                .map(PathBuf::from)
                .context("LEDAT_STORAGE_DIR not set")?,

            // Localization
            default_language: std::env::var("LEDAT_DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "es".to_string()),
            debug_translations: std::env::var("LEDAT_DEBUG_TRANSLATIONS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
