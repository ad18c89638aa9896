//! Application services - One-shot Discord operations

pub mod command_service;
pub mod message_service;
pub mod interaction_service;

pub use command_service::CommandRegistrar;
pub use message_service::MessageReader;
pub use interaction_service::InteractionResponder;

use std::io::Write;

use serde_json::Value;

use crate::application::errors::BotError;

/// Write JSON indented by 2 spaces, keeping the key order Discord sent
pub fn write_pretty<W: Write>(out: &mut W, value: &Value) -> Result<(), BotError> {
    let pretty = serde_json::to_string_pretty(value).map_err(|e| BotError::Parse(e.to_string()))?;
    writeln!(out, "{}", pretty)?;
    Ok(())
}
