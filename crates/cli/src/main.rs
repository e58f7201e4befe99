//! Frontdesk CLI entry point.
//!
//! Commands:
//! - `onboard`  Write a starter config
//! - `chat`     Talk to Sarah, Daisy and John in the terminal
//! - `route`    Show which persona a message would go to
//! - `gateway`  Serve the browser widget API
//! - `config`   Show, locate or validate the config

use clap::{Parser, Subcommand};
use frontdesk_core::Language;

mod commands;

#[derive(Parser)]
#[command(
    name = "frontdesk",
    about = "Frontdesk: a multi-persona hotel concierge",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Onboard,

    /// Chat with the front desk
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Reply language for this session (en, tl, zh, ja, ko)
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Explain how a message would be routed
    Route {
        /// The guest message
        text: String,

        /// Language whose scripted tables are consulted
        #[arg(short, long, default_value = "en")]
        language: Language,
    },

    /// Start the HTTP gateway server
    Gateway {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (keys redacted)
    Show,
    /// Print the config file path
    Path,
    /// Load and validate the configuration
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Chat { message, language } => commands::chat::run(message, language).await?,
        Commands::Route { text, language } => commands::route::run(&text, language)?,
        Commands::Gateway { port } => commands::gateway::run(port).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}
