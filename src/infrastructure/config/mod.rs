//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::application::errors::ConfigError;

/// Discord REST API base, version 10
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub discord: DiscordConfig,
}

/// Discord credentials and endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DiscordConfig {
    pub api_base: String,
    pub app_id: String,
    pub bot_token: String,
    pub channel_id: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            app_id: String::new(),
            bot_token: String::new(),
            channel_id: String::new(),
        }
    }
}

/// Values given on the command line; they win over file and environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub app_id: Option<String>,
    pub channel_id: Option<String>,
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Build the effective config: defaults, then file, then environment,
    /// then command line.
    pub fn resolve(path: impl AsRef<Path>, overrides: &Overrides) -> Self {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Config::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            })
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        config.apply_env();
        config.apply_overrides(overrides);
        config
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Apply `APP_ID`, `BOT_TOKEN`, `CHANNEL_ID` and `DISCORD_API_BASE`
    /// as returned by `lookup`.
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(app_id) = lookup("APP_ID") {
            self.discord.app_id = app_id;
        }
        if let Some(token) = lookup("BOT_TOKEN") {
            self.discord.bot_token = token;
        }
        if let Some(channel_id) = lookup("CHANNEL_ID") {
            self.discord.channel_id = channel_id;
        }
        if let Some(base) = lookup("DISCORD_API_BASE") {
            self.discord.api_base = base;
        }
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(token) = &overrides.token {
            self.discord.bot_token = token.clone();
        }
        if let Some(app_id) = &overrides.app_id {
            self.discord.app_id = app_id.clone();
        }
        if let Some(channel_id) = &overrides.channel_id {
            self.discord.channel_id = channel_id.clone();
        }
    }
}

/// Log a warning for an empty secret. The request is still sent and
/// Discord gets to reject it.
pub fn warn_if_empty(name: &str, value: &str) {
    if value.is_empty() {
        tracing::warn!("{} is empty, Discord will likely reject the request", name);
    }
}

/// Short prefix of a secret, safe for logs
pub fn redact(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_points_at_v10() {
        let config = Config::default();
        assert_eq!(config.discord.api_base, "https://discord.com/api/v10");
        assert!(config.discord.bot_token.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("discord:\n  app-id: '123'\n").unwrap();
        assert_eq!(config.discord.app_id, "123");
        assert_eq!(config.discord.api_base, DEFAULT_API_BASE);
        assert!(config.discord.channel_id.is_empty());
    }

    #[test]
    fn test_yaml_roundtrip_uses_kebab_case() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("api-base"));
        assert!(yaml.contains("bot-token"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_yaml_is_parse_error() {
        let err = Config::from_yaml("discord: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_then_cli_precedence() {
        let mut config = Config::from_yaml(
            "discord:\n  app-id: file-app\n  bot-token: file-token\n  channel-id: file-chan\n",
        )
        .unwrap();

        let vars: HashMap<&str, &str> = [("BOT_TOKEN", "env-token"), ("CHANNEL_ID", "env-chan")]
            .into_iter()
            .collect();
        config.apply_vars(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.discord.app_id, "file-app");
        assert_eq!(config.discord.bot_token, "env-token");
        assert_eq!(config.discord.channel_id, "env-chan");

        config.apply_overrides(&Overrides {
            token: Some("cli-token".to_string()),
            app_id: None,
            channel_id: None,
        });
        assert_eq!(config.discord.bot_token, "cli-token");
        assert_eq!(config.discord.channel_id, "env-chan");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::resolve(
            "does-not-exist/config.yaml",
            &Overrides {
                token: Some("abc".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(config.discord.bot_token, "abc");
    }

    #[test]
    fn test_unparsable_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("wake-bot-bad-config-{}.yaml", std::process::id()));
        std::fs::write(&path, "discord: [x]\n").unwrap();

        let config = Config::resolve(
            &path,
            &Overrides {
                token: Some("abc".to_string()),
                app_id: Some("123".to_string()),
                channel_id: None,
            },
        );
        std::fs::remove_file(&path).unwrap();

        let expected_base = std::env::var("DISCORD_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        assert_eq!(config.discord.api_base, expected_base);
        assert_eq!(config.discord.bot_token, "abc");
        assert_eq!(config.discord.app_id, "123");
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact("abcdefgh"), "abcd...");
        assert_eq!(redact(""), "...");
    }
}
