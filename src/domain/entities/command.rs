use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the slash-command that wakes a device
pub const WAKE_COMMAND_NAME: &str = "wake";

/// Description shown next to `/wake` in the Discord client
pub const WAKE_COMMAND_DESCRIPTION: &str = "Wake a device on the network";

/// Application command type, sent as its integer value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CommandType {
    /// Slash-command typed as `/name`
    ChatInput = 1,
    /// Right-click command on a user
    User = 2,
    /// Right-click command on a message
    Message = 3,
}

impl From<CommandType> for u8 {
    fn from(kind: CommandType) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for CommandType {
    type Error = UnknownCommandType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CommandType::ChatInput),
            2 => Ok(CommandType::User),
            3 => Ok(CommandType::Message),
            other => Err(UnknownCommandType(other)),
        }
    }
}

/// Raised when Discord reports a command type this crate does not know
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown application command type: {0}")]
pub struct UnknownCommandType(pub u8);

/// Application command as sent to the create/overwrite endpoints.
///
/// Field order is the wire order: `name`, `type`, `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CommandType,
    pub description: String,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, kind: CommandType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
        }
    }

    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, CommandType::ChatInput, description)
    }

    /// The `/wake` command
    pub fn wake() -> Self {
        Self::chat_input(WAKE_COMMAND_NAME, WAKE_COMMAND_DESCRIPTION)
    }
}
