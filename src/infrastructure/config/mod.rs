use serde::Deserialize;
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub discord_token: String,
    /// When set, slash commands are registered for this guild only instead
    /// of globally. Guild registration propagates instantly, which is what
    /// you want while developing.
    pub guild_id: Option<u64>,
    pub reddit_base_url: String,
    pub reddit_timeout_seconds: u64,
    pub reddit_user_agent: String,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            discord_token: env::var("DISCORD_TOKEN")
                .map_err(|_| AppError::Config("DISCORD_TOKEN must be set".to_string()))?,
            guild_id: match env::var("GUILD_ID") {
                Ok(raw) => Some(parse_guild_id(&raw)?),
                Err(_) => None,
            },
            reddit_base_url: env::var("REDDIT_BASE_URL")
                .unwrap_or_else(|_| "https://reddit.com".to_string()),
            reddit_timeout_seconds: env::var("REDDIT_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Config("REDDIT_TIMEOUT_SECONDS must be a number".to_string())
                })?,
            reddit_user_agent: env::var("REDDIT_USER_AGENT")
                .unwrap_or_else(|_| "subdeck-bot".to_string()),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })
                .map_err(|e| AppError::Config(e.to_string()))?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .map_err(|e| AppError::Config(e.to_string()))?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_guild_id(raw: &str) -> AppResult<u64> {
    let id: u64 = raw
        .parse()
        .map_err(|_| AppError::Config("GUILD_ID must be a number".to_string()))?;
    if id == 0 {
        return Err(AppError::Config("GUILD_ID must be non-zero".to_string()));
    }
    Ok(id)
}
