use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "genie-cli")]
#[command(about = "Travel Genie CLI - inspect destinations, rules and configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the destinations on the map
    Destinations {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the quick actions offered in the chat
    Actions {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Resolve an utterance against the rule book and print the reply as JSON
    Reply {
        /// The utterance, as typed in the chat
        #[arg(required = true)]
        text: Vec<String>,
        /// Use the extended trip-phase rules regardless of the config file
        #[arg(long)]
        extended: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Destinations { json } => commands::destinations::list(json)?,
        Commands::Actions { json } => commands::actions::list(json)?,
        Commands::Reply { text, extended } => {
            commands::reply::resolve(&text.join(" "), extended).await?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show().await?,
            ConfigAction::Path => commands::config::path()?,
            ConfigAction::Init { force } => commands::config::init(force).await?,
        },
    }

    Ok(())
}
