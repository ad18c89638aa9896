use std::io::Write;

use crate::application::errors::BotError;
use crate::application::services::write_pretty;
use crate::domain::traits::Transport;
use crate::infrastructure::config::warn_if_empty;
use crate::infrastructure::discord::DiscordClient;

/// Prints the recent messages of a channel
pub struct MessageReader<'a, T: Transport> {
    client: &'a DiscordClient<T>,
    channel_id: String,
}

impl<'a, T: Transport> MessageReader<'a, T> {
    pub fn new(client: &'a DiscordClient<T>, channel_id: impl Into<String>) -> Self {
        Self {
            client,
            channel_id: channel_id.into(),
        }
    }

    /// Fetch the channel's message list and write it verbatim, pretty-printed
    pub fn print<W: Write>(&self, out: &mut W) -> Result<(), BotError> {
        warn_if_empty("CHANNEL_ID", &self.channel_id);

        let messages = self.client.get_channel_messages(&self.channel_id)?;
        if let Some(list) = messages.as_array() {
            tracing::info!("Fetched {} messages from channel {}", list.len(), self.channel_id);
        }

        write_pretty(out, &messages)
    }
}
