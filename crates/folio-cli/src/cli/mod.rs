//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::{self, paths};
use folio_core::logging;

use crate::modes;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.4")]
#[command(author = "Sumalatha Salapu")]
#[command(about = "Terminal portfolio of Sumalatha Salapu")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // default to the portfolio TUI
    let Some(command) = cli.command else {
        let config = config::Config::load().context("load config")?;

        // The TUI owns the terminal, so logs go to a file. The guard must
        // outlive the runtime or buffered lines are dropped.
        let _guard = logging::init(&paths::logs_dir()).context("init logging")?;

        return modes::run_portfolio(&config);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}
