//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into the core registry
//! 3. Formats and displays output
//!
//! Only `set` and `import` write to disk, and only to the Default document.

mod definitions;
mod import;
mod list;
mod order;
mod set;
mod show_config;

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::args::{Cli, Command};
use crate::core::assets::{AssetResolver, ContentResolver, NoopResolver};
use crate::core::config::Config;
use crate::core::paths::RegistryPaths;
use crate::ui::output::Verbosity;

/// Execution context shared by all handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Registry and content roots after config and flag precedence.
    pub paths: RegistryPaths,
    /// Output verbosity.
    pub verbosity: Verbosity,
    /// Print JSON instead of text.
    pub json: bool,
}

impl Context {
    /// Build a context; CLI flags override config.
    ///
    /// Relative root flags resolve against `cwd`.
    pub fn new(config: &Config, cli: &Cli, cwd: &Path) -> Self {
        let under_cwd = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                cwd.join(p)
            }
        };
        Self::from_parts(
            config,
            cli.registry_root.as_ref().map(under_cwd),
            cli.content_root.as_ref().map(under_cwd),
            cli.quiet,
            cli.debug,
            cli.json,
        )
    }

    pub fn from_parts(
        config: &Config,
        registry_root: Option<PathBuf>,
        content_root: Option<PathBuf>,
        quiet: bool,
        debug: bool,
        json: bool,
    ) -> Self {
        let paths = RegistryPaths::new(
            registry_root.unwrap_or_else(|| config.registry_root()),
            content_root.unwrap_or_else(|| config.content_root()),
        );
        Self {
            paths,
            verbosity: Verbosity::from_flags(quiet, debug),
            json,
        }
    }

    /// The asset resolver for this context.
    pub fn resolver(&self, resolve: bool) -> Box<dyn AssetResolver> {
        if resolve {
            Box::new(ContentResolver::new(self.paths.content_root()))
        } else {
            Box::new(NoopResolver)
        }
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context, config: &Config) -> Result<()> {
    match command {
        Command::List { no_resolve } => list::list(ctx, !no_resolve),
        Command::Order => order::order(ctx),
        Command::Set { name, path, size } => set::set(ctx, name, path, size),
        Command::Import { file } => import::import(ctx, &file),
        Command::Definitions => definitions::definitions(ctx),
        Command::Config => show_config::show(ctx, config),
    }
}
