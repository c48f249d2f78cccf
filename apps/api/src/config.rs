use anyhow::{Context, Result};

const DEFAULT_GENERATION_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of an OpenAI-compatible completion API (without `/chat/completions`).
    pub generation_api_url: String,
    pub generation_api_key: String,
    pub generation_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            generation_api_url: optional_env("GENERATION_API_URL", DEFAULT_GENERATION_API_URL),
            generation_api_key: require_env("GENERATION_API_KEY")?,
            generation_model: optional_env("GENERATION_MODEL", DEFAULT_GENERATION_MODEL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
