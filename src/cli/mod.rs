//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and initialise logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds a
//! [`commands::Context`] from config plus flags, and dispatches to handlers
//! that call into [`crate::core`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use crate::core::config::Config;
use crate::logging::{self, LogConfig};
use anyhow::{Context as _, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let cwd = match cli.cwd.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let config = Config::load(&cwd)
        .context("Failed to load configuration")?
        .config;

    let mut log_config = LogConfig::from_names(&config.log_level(), &config.log_format())
        .with_flags(cli.quiet, cli.debug);
    if let Some(format) = cli.log_format {
        log_config = log_config.with_format(format);
    }
    logging::init(&log_config);

    let ctx = commands::Context::new(&config, &cli, &cwd);
    commands::dispatch(cli.command, &ctx, &config)
}
