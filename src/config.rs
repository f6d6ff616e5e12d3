use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the Telegram bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Which set of welcome/help/fallback texts the bot speaks with.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    #[default]
    Detailed,
    Brief,
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Voice::Detailed => write!(f, "detailed"),
            Voice::Brief => write!(f, "brief"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub bot: BotConfig,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BotConfig {
    #[serde(default)]
    pub voice: Voice,
}

/// On-disk shape of `config.toml`. Every section is optional.
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    telegram: FileTelegramConfig,
    #[serde(default)]
    bot: BotConfig,
}

#[derive(Debug, Deserialize, Default)]
struct FileTelegramConfig {
    #[serde(default)]
    bot_token: Option<String>,
}

impl Config {
    /// Load `.env`, the optional TOML file at `path`, and the token from the environment.
    pub fn load(path: &Path) -> Result<Self> {
        // A missing .env is the normal case in deployments.
        dotenvy::dotenv().ok();

        let content = if path.exists() {
            Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?,
            )
        } else {
            None
        };

        Self::resolve(content.as_deref(), std::env::var(TOKEN_ENV).ok())
            .with_context(|| format!("Invalid configuration (file: {})", path.display()))
    }

    /// Combine file contents and the environment token. The environment wins.
    pub fn resolve(file_content: Option<&str>, env_token: Option<String>) -> Result<Self> {
        let file: FileConfig = match file_content {
            Some(content) => toml::from_str(content).context("Failed to parse config file")?,
            None => FileConfig::default(),
        };

        let bot_token = env_token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| file.telegram.bot_token.filter(|t| !t.trim().is_empty()));

        let Some(bot_token) = bot_token else {
            bail!("Missing {} in environment variables", TOKEN_ENV);
        };

        Ok(Config {
            telegram: TelegramConfig {
                bot_token: bot_token.trim().to_string(),
            },
            bot: file.bot,
        })
    }
}
