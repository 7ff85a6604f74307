use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

/// Settings shared by every enrichment fetch in one request.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub timeout: Duration,
    pub max_content_length: usize,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub searxng_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub scraper: ScraperConfig,
    pub default_max_results: usize,
    pub default_engines: String,
}

impl Config {
    /// Read configuration from the environment. Every key has a default
    /// matching the reference deployment, so only a value that fails to
    /// parse is an error.
    pub fn from_env() -> Result<Config> {
        dotenv().ok(); // Load .env file if present

        let timeout_secs: u64 = parse_env_or_default("SCRAPER_TIMEOUT_SECS", 10)?;
        Ok(Config {
            searxng_url: get_env_or_default("SEARXNG_URL", "http://searxng:8080")
                .trim_end_matches('/')
                .to_string(),
            server_host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
            server_port: parse_env_or_default("SERVER_PORT", 8000)?,
            scraper: ScraperConfig {
                timeout: Duration::from_secs(timeout_secs),
                max_content_length: parse_env_or_default("SCRAPER_MAX_CONTENT_LENGTH", 2500)?,
                user_agent: get_env_or_default(
                    "SCRAPER_USER_AGENT",
                    "Mozilla/5.0 (compatible; TavilyBot/1.0)",
                ),
            },
            default_max_results: parse_env_or_default("DEFAULT_MAX_RESULTS", 10)?,
            default_engines: get_env_or_default("DEFAULT_ENGINES", "google,duckduckgo,brave"),
        })
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw}")),
        Err(_) => Ok(default),
    }
}
