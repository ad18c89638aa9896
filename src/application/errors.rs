//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Discord API error: status {status}, body: {body}")]
    Api { status: u16, body: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl BotError {
    /// HTTP status carried by the error, if the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            BotError::Api { status, .. } => Some(*status),
            BotError::RateLimited(_) => Some(429),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}
