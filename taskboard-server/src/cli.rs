//! Command line flags

use clap::Parser;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve the taskboard API and item list
#[derive(Debug, Default, Parser)]
#[command(name = "taskboard-server", version, about)]
pub struct Cli {
    /// Configuration file (default: ./taskboard.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// SQLite database for the item list
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// JSON snapshot file for the board
    #[arg(long, value_name = "PATH")]
    pub board_snapshot: Option<PathBuf>,

    /// Heading shown above the item list
    #[arg(long, value_name = "TITLE")]
    pub list_title: Option<String>,

    /// Enable trace logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,
}

/// Config keys set on the command line; unset flags leave lower layers alone
#[derive(Debug, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<SocketAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_snapshot: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Cli {
    /// The log level chosen by flags, if any
    pub fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else if self.debug {
            Some("debug")
        } else if self.verbose {
            Some("trace")
        } else {
            None
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind: self.bind,
            database: self.database.clone(),
            board_snapshot: self.board_snapshot.clone(),
            list_title: self.list_title.clone(),
            log_level: self.log_level().map(str::to_string),
        }
    }
}
