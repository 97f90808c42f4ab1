//! Marquee CLI - Command-line interface
//!
//! Runs the browser search UI or performs a single search from the terminal.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search movies and series from the browser or the terminal")]
struct Cli {
    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    /// Directory for the full debug log of the last run
    #[arg(long)]
    logs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())
        .context("failed to initialize logging")?;

    if let Err(e) = commands::handle_command(cli.command).await {
        if e.is_user_error() {
            eprintln!("{}", e.user_message());
            std::process::exit(2);
        }
        return Err(e).context("marquee failed");
    }

    Ok(())
}
