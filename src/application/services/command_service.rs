use std::io::Write;

use crate::application::errors::BotError;
use crate::domain::entities::CommandDescriptor;
use crate::domain::traits::Transport;
use crate::infrastructure::config::warn_if_empty;
use crate::infrastructure::discord::DiscordClient;

/// Registers the `/wake` command with an application
pub struct CommandRegistrar<'a, T: Transport> {
    client: &'a DiscordClient<T>,
    app_id: String,
}

impl<'a, T: Transport> CommandRegistrar<'a, T> {
    pub fn new(client: &'a DiscordClient<T>, app_id: impl Into<String>) -> Self {
        Self {
            client,
            app_id: app_id.into(),
        }
    }

    /// Create (or upsert) the global `/wake` command with a single POST.
    /// The returned descriptor is only logged.
    pub fn register(&self) -> Result<(), BotError> {
        warn_if_empty("APP_ID", &self.app_id);

        let command = CommandDescriptor::wake();
        let created = self.client.create_global_command(&self.app_id, &command)?;

        tracing::info!("Registered /{} for application {}", command.name, self.app_id);
        tracing::debug!("Discord answered: {}", created);
        Ok(())
    }

    /// Replace the whole global command set with `[wake]` and print `ok.`
    pub fn overwrite<W: Write>(&self, out: &mut W) -> Result<(), BotError> {
        warn_if_empty("APP_ID", &self.app_id);

        let commands = [CommandDescriptor::wake()];
        match self.client.overwrite_global_commands(&self.app_id, &commands) {
            Ok(_) => {
                writeln!(out, "ok.")?;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error registering commands");
                Err(e)
            }
        }
    }
}
