use std::io::Write;

use crate::application::errors::BotError;
use crate::application::services::write_pretty;
use crate::domain::entities::InteractionEdit;
use crate::domain::traits::Transport;
use crate::infrastructure::config::warn_if_empty;
use crate::infrastructure::discord::DiscordClient;

/// Fills in a deferred `/wake` reply ("thinking...") with a result text
pub struct InteractionResponder<'a, T: Transport> {
    client: &'a DiscordClient<T>,
    app_id: String,
}

impl<'a, T: Transport> InteractionResponder<'a, T> {
    pub fn new(client: &'a DiscordClient<T>, app_id: impl Into<String>) -> Self {
        Self {
            client,
            app_id: app_id.into(),
        }
    }

    /// Edit the original response of one interaction and print the
    /// resulting message
    pub fn respond<W: Write>(
        &self,
        interaction_token: &str,
        content: &str,
        out: &mut W,
    ) -> Result<(), BotError> {
        warn_if_empty("APP_ID", &self.app_id);

        let edit = InteractionEdit::new(content);
        let message = self
            .client
            .edit_original_response(&self.app_id, interaction_token, &edit)?;

        tracing::info!("Edited original response for application {}", self.app_id);
        write_pretty(out, &message)
    }
}
