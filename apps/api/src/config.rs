use anyhow::{Context, Result};

pub const DEFAULT_JOURNAL_HISTORY_LIMIT: i64 = 50;
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Application configuration loaded from environment variables.
/// Without `DATABASE_URL` the service runs on the in-memory store.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// How many of a user's most recent journal entries feed the profile.
    pub journal_history_limit: i64,
    /// How many ranked careers are kept per regeneration.
    pub recommendation_limit: usize,
    pub seed_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            journal_history_limit: DEFAULT_JOURNAL_HISTORY_LIMIT,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            seed_catalog: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            journal_history_limit: parse_env(
                "JOURNAL_HISTORY_LIMIT",
                defaults.journal_history_limit,
            )?,
            recommendation_limit: parse_env("RECOMMENDATION_LIMIT", defaults.recommendation_limit)?,
            seed_catalog: parse_env("SEED_CATALOG", defaults.seed_catalog)?,
        };

        if config.journal_history_limit < 1 {
            anyhow::bail!("JOURNAL_HISTORY_LIMIT must be at least 1");
        }
        if config.recommendation_limit == 0 {
            anyhow::bail!("RECOMMENDATION_LIMIT must be at least 1");
        }
        Ok(config)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
