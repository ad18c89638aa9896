use clap::{Parser, Subcommand};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

mod domain;
mod application;
mod infrastructure;

use application::errors::BotError;
use application::services::{CommandRegistrar, InteractionResponder, MessageReader};
use infrastructure::config::{redact, Config, Overrides};
use infrastructure::discord::{DiscordClient, ReqwestTransport};

#[derive(Parser)]
#[command(name = "wake-bot")]
#[command(about = "Operator utilities for the wake-on-LAN Discord bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config and BOT_TOKEN)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the /wake slash-command (create global command)
    AddCommand {
        /// Application ID (overrides config and APP_ID)
        #[arg(long)]
        app_id: Option<String>,
    },
    /// Print the recent messages of a channel as JSON
    ReadMessages {
        /// Channel ID (overrides config and CHANNEL_ID)
        #[arg(long)]
        channel_id: Option<String>,
    },
    /// Replace all global commands with /wake
    OverwriteCommands {
        /// Application ID (overrides config and APP_ID)
        #[arg(long)]
        app_id: Option<String>,
    },
    /// Edit the original response of a deferred interaction
    EditResponse {
        /// Application ID (overrides config and APP_ID)
        #[arg(long)]
        app_id: Option<String>,
        /// Token of the interaction to answer
        #[arg(long)]
        interaction_token: String,
        /// New message content
        content: String,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Logs go to stderr, stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(log_filter(&std::env::var("RUST_LOG").unwrap_or_default()))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.status() {
            Some(status) => tracing::error!("Discord answered HTTP {}: {}", status, e),
            None => tracing::error!("{}", e),
        }
        process::exit(1);
    }
}

/// `RUST_LOG` directives, falling back to INFO when none are given
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .parse_lossy(directives)
}

fn run(cli: Cli) -> Result<(), BotError> {
    let mut overrides = Overrides {
        token: cli.token,
        ..Default::default()
    };

    match cli.command {
        Commands::Version => {
            println!("wake-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
        Commands::AddCommand { app_id } => {
            overrides.app_id = app_id;
            let config = Config::resolve(&cli.config, &overrides);
            let client = discord_client(&config)?;
            CommandRegistrar::new(&client, config.discord.app_id.clone()).register()
        }
        Commands::OverwriteCommands { app_id } => {
            overrides.app_id = app_id;
            let config = Config::resolve(&cli.config, &overrides);
            let client = discord_client(&config)?;
            CommandRegistrar::new(&client, config.discord.app_id.clone())
                .overwrite(&mut io::stdout().lock())
        }
        Commands::ReadMessages { channel_id } => {
            overrides.channel_id = channel_id;
            let config = Config::resolve(&cli.config, &overrides);
            let client = discord_client(&config)?;
            MessageReader::new(&client, config.discord.channel_id.clone())
                .print(&mut io::stdout().lock())
        }
        Commands::EditResponse { app_id, interaction_token, content } => {
            overrides.app_id = app_id;
            let config = Config::resolve(&cli.config, &overrides);
            let client = discord_client(&config)?;
            InteractionResponder::new(&client, config.discord.app_id.clone())
                .respond(&interaction_token, &content, &mut io::stdout().lock())
        }
    }
}

fn discord_client(config: &Config) -> Result<DiscordClient<ReqwestTransport>, BotError> {
    infrastructure::config::warn_if_empty("BOT_TOKEN", &config.discord.bot_token);
    tracing::debug!(
        "Using {} (token: {})",
        config.discord.api_base,
        redact(&config.discord.bot_token)
    );

    let transport = ReqwestTransport::new()?;
    Ok(DiscordClient::from_config(transport, &config.discord))
}

fn init_config() -> Result<(), BotError> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("# Save this to config.yaml and fill in the secrets.");
    Ok(())
}
