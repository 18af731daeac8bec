use std::fs;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use tasklist::cli::{Cli, Command};
use tasklist::config::Config;
use tasklist::repl::Session;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasklist")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Log to a file so the session output stays clean
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("tasklist.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(redo_policy = %config.redo_policy, "tasklist starting");

    let command = cli.command.unwrap_or(Command::Repl);
    if !config.color || matches!(command, Command::Batch { .. }) {
        colored::control::set_override(false);
    }

    let mut session = Session::new(&config);
    match command {
        Command::Repl => session.run_interactive(),
        Command::Batch { file } => {
            let failures = match file {
                Some(path) => {
                    let handle = fs::File::open(&path).context(format!("Failed to open {}", path.display()))?;
                    session.run_batch(BufReader::new(handle), io::stdout().lock())?
                }
                None => session.run_batch(io::stdin().lock(), io::stdout().lock())?,
            };
            if failures > 0 {
                return Err(eyre::eyre!("{} command(s) failed", failures));
            }
            Ok(())
        }
    }
}
