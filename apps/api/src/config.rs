use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default — the service runs out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Path of the content store file (the whole-site JSON document).
    pub content_file: PathBuf,
    /// Root of the static asset bundle (scripts, images, uploads).
    pub public_dir: PathBuf,
    /// Where uploaded resumes land. Served under `uploads/` by the static layer.
    pub upload_dir: PathBuf,
    /// Display name used in page titles and the footer.
    pub site_name: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let public_dir = PathBuf::from(env_or("PUBLIC_DIR", "public"));
        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| public_dir.join("uploads"));

        Ok(Config {
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            content_file: PathBuf::from(env_or("CONTENT_FILE", "data/content.json")),
            public_dir,
            upload_dir,
            site_name: env_or("SITE_NAME", "Showreel"),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
