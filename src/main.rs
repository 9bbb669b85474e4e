mod commands;
mod config;
mod providers;
mod render;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "phstatus")]
#[command(about = "Set your Slack status from a holiday calendar")]
struct Cli {
    /// Config file (default: ~/.config/phstatus/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a status if today or one of the next few days is a holiday
    Check {
        /// Check as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Print the status that would be set without publishing it
        #[arg(long)]
        dry_run: bool,
    },
    /// List merged holidays in the lookahead window
    Holidays {
        /// First day of the window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Number of days after the first day to include
        #[arg(long)]
        days: Option<u32>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a config file template
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = Config::config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { date, dry_run } => {
            let today = commands::resolve_date(date.as_deref())?;
            let config = Config::load(&config_path)?;
            commands::check::run(&config, today, dry_run).await
        }
        Commands::Holidays { date, days, json } => {
            let from = commands::resolve_date(date.as_deref())?;
            let config = Config::load(&config_path)?;
            commands::holidays::run(&config, from, days, json).await
        }
        Commands::Init { force } => commands::init::run(&config_path, force),
    }
}
