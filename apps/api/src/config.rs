use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every integration is optional; missing keys select the offline backends.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// User id the auth stub resolves every request to.
    pub demo_user_id: i64,
    pub seed_sample_data: bool,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub notion_api_key: Option<String>,
    pub notion_database_id: String,
    pub http_timeout: Duration,
}

/// Placeholder key some setups export; treated as "no key".
const DUMMY_OPENAI_KEY: &str = "dummy-key-for-development";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            demo_user_id: parse_env("DEMO_USER_ID", 1)?,
            seed_sample_data: parse_env("SEED_SAMPLE_DATA", true)?,
            openai_api_key: optional_env("OPENAI_API_KEY").filter(|k| k != DUMMY_OPENAI_KEY),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| crate::llm_client::DEFAULT_MODEL.to_string()),
            notion_api_key: optional_env("NOTION_API_KEY"),
            notion_database_id: std::env::var("NOTION_DATABASE_ID").unwrap_or_default(),
            http_timeout: Duration::from_secs(parse_env("HTTP_TIMEOUT_SECS", 30)?),
        })
    }
}

impl Default for Config {
    /// Offline configuration: no integrations, sample data on, demo user 1.
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            demo_user_id: 1,
            seed_sample_data: true,
            openai_api_key: None,
            openai_model: crate::llm_client::DEFAULT_MODEL.to_string(),
            notion_api_key: None,
            notion_database_id: String::new(),
            http_timeout: Duration::from_secs(30),
        }
    }
}

/// Reads a variable, treating unset and blank the same.
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
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_valid_numbers_and_bools() {
        assert_eq!(parse_value::<u16>("PORT", "8080").unwrap(), 8080);
        assert!(!parse_value::<bool>("SEED_SAMPLE_DATA", "false").unwrap());
        assert_eq!(parse_value::<i64>("DEMO_USER_ID", "42").unwrap(), 42);
    }

    #[test]
    fn test_parse_value_error_names_variable() {
        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_default_is_offline() {
        let config = Config::default();
        assert!(config.openai_api_key.is_none());
        assert!(config.notion_api_key.is_none());
        assert_eq!(config.demo_user_id, 1);
        assert_eq!(config.openai_model, "gpt-4o");
    }
}
