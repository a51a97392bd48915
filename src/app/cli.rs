//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Airmouse - drive the system cursor with hand gestures
#[derive(Parser, Debug)]
#[command(name = "airmouse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read detector frames and drive the pointer
    Run {
        /// Read frames from a file instead of the configured detector
        /// command (or stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Log pointer moves instead of moving the real pointer
        #[arg(long)]
        dry_run: bool,
    },

    /// Classify recorded frames and log the events they would produce
    Inspect {
        /// Recorded frame file (one JSON frame per line)
        input: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration to the default path
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
