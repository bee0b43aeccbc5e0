//! Moodlens CLI - image & text sentiment demo over hosted inference models.
//!
//! Moodlens combines an image (or its caption) with additional text and
//! predicts the overall sentiment, recording every result to a CSV table.
//!
//! # Usage
//!
//! ```bash
//! # Classify an image plus text
//! moodlens classify --image cat.jpg --text "I love this"
//!
//! # Classify with a manual caption
//! moodlens classify --caption "a cat sitting on a couch" --text "I love this"
//!
//! # Show stored records
//! moodlens records
//!
//! # View configuration
//! moodlens config show
//! ```
//!
//! Bare `moodlens` on a terminal starts the interactive mode.

use clap::{CommandFactory, Parser, Subcommand};

mod cli;
mod logging;

/// Moodlens - image & text sentiment demo.
#[derive(Parser, Debug)]
#[command(name = "moodlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify an image (or caption) plus text and record the result
    Classify(cli::classify::ClassifyArgs),

    /// Show stored classification records
    Records(cli::records::RecordsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match moodlens_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `moodlens config path`."
            );
            moodlens_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Moodlens v{}", moodlens_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Some(Commands::Classify(args)) => cli::classify::execute(args, &config).await,
        Some(Commands::Records(args)) => cli::records::execute(args, &config),
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        None => {
            if console::user_attended() {
                cli::interactive::run(&config).await
            } else {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}
