//! CLI argument parsing for tasklist

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, about = "Personal task list with undo/redo", long_about = None)]
#[command(after_help = "Logs are written to: ~/.local/share/tasklist/logs/tasklist.log")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start an interactive session (default)
    Repl,

    /// Run commands line by line from a file, or stdin
    Batch {
        /// Command file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}
