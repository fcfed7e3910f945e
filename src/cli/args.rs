//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--registry-root <path>` / `--content-root <path>`: Override config
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::PropSize;
use crate::logging::LogFormat;

/// propreg - Layered prop registry tool
#[derive(Parser, Debug)]
#[command(name = "propreg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if propreg was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Directory searched for *.PropRegistry.json (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub registry_root: Option<PathBuf>,

    /// Directory mesh asset paths resolve against (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub content_root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log format: pretty, compact or json (overrides config)
    #[arg(long, global = true, value_name = "FORMAT", value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse()
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the merged props from every registry file
    #[command(
        long_about = "List the merged props from every registry file.\n\n\
            All *.PropRegistry.json files under the registry root are folded in \
            order: the Default file first, then the rest sorted by path. Later \
            files override earlier ones by prop name."
    )]
    List {
        /// Skip mesh resolution against the content root
        #[arg(long)]
        no_resolve: bool,
    },

    /// Show the order registry files are processed in
    Order,

    /// Add or update one prop in the Default registry file
    Set {
        /// Prop name (the registry key)
        name: String,

        /// Mesh asset path
        #[arg(long)]
        path: String,

        /// Size class (Tiny, Small, Medium, Big, Huge)
        #[arg(long, value_parser = parse_size)]
        size: PropSize,
    },

    /// Add or update every prop of a JSON file in the Default registry file
    Import {
        /// File with a "definitions" array in registry format
        file: PathBuf,
    },

    /// Build actor definitions from the merged props
    Definitions,

    /// Show the effective configuration
    Config,
}

fn parse_size(s: &str) -> Result<PropSize, String> {
    s.parse::<PropSize>().map_err(|e| e.to_string())
}
