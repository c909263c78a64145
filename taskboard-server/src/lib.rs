//! Taskboard HTTP server
//!
//! Serves two independent surfaces from one process:
//!
//! - the item list (`/`, `/add`, `/edit`, `/delete`) from `taskboard-items`
//! - the board JSON API (`/api/...`) over a single [`taskboard::BoardContext`]
//!
//! plus `GET /health`.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use cli::Cli;
pub use config::{Config, ConfigError, ConfigResult};
