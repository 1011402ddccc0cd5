//! CLI module for the repo digest service
//!
//! Provides subcommands:
//! - `serve`: HTTP surface used by the chat transport
//! - `ask`: resolve one message and print the replies
//! - `projects`: print the repository listing

pub mod ask;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// PMP Repo Digest - Summarize GitHub repositories from free-text questions
#[derive(Parser)]
#[command(name = "pmp-repo-digest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Resolve a single message and print the replies
    Ask(ask::AskArgs),

    /// Print the most popular repositories
    Projects,
}

/// Load `.env`, configuration and logging shared by every subcommand
fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;
    config.validate()?;

    Ok(config)
}
