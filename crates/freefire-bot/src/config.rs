//! Configuration management for freefire-bot

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Complete bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord: DiscordBotConfig,
    pub freefire: FreeFireConfig,
}

/// Discord bot specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordBotConfig {
    /// Bot token from the Discord developer portal
    #[serde(default = "default_bot_token")]
    pub bot_token: String,
}

/// Free Fire profile service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeFireConfig {
    /// Service-issued API key
    #[serde(default)]
    pub api_key: String,
    /// Service-issued user identifier
    #[serde(default)]
    pub user_uid: String,
    /// Region code to query
    #[serde(default = "default_region")]
    pub region: String,
    /// Whether the per-user command cooldown is enforced
    #[serde(default = "default_true")]
    pub rate_limit_enabled: bool,
    /// Cooldown window in seconds
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
}

impl Default for FreeFireConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            user_uid: String::new(),
            region: default_region(),
            rate_limit_enabled: default_true(),
            cooldown_secs: default_cooldown_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var("DISCORD_BOT_TOKEN").context("DISCORD_BOT_TOKEN not set")?;

        let api_key = std::env::var("FF_API_KEY").unwrap_or_default();
        let user_uid = std::env::var("FF_USER_UID").unwrap_or_default();
        let region = std::env::var("FF_REGION").unwrap_or_else(|_| default_region());

        let rate_limit_enabled = std::env::var("FF_RATE_LIMIT")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let cooldown_secs = std::env::var("FF_COOLDOWN_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_cooldown_secs);

        Ok(Config {
            discord: DiscordBotConfig { bot_token },
            freefire: FreeFireConfig {
                api_key,
                user_uid,
                region,
                rate_limit_enabled,
                cooldown_secs,
            },
        })
    }
}

fn default_bot_token() -> String {
    std::env::var("DISCORD_BOT_TOKEN").unwrap_or_default()
}

fn default_region() -> String {
    "bd".to_string()
}

fn default_true() -> bool {
    true
}

fn default_cooldown_secs() -> u64 {
    10
}
