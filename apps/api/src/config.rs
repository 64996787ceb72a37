use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// The upstream base URL and model id are hardcoded in `llm_client` — only
/// the secret and server settings come from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub longcat_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            longcat_api_key: require_env("LONGCAT_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
