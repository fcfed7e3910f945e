//! config command - Show the effective configuration

use anyhow::Result;

use super::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Print the effective configuration and where it came from.
pub fn show(ctx: &Context, config: &Config) -> Result<()> {
    let global = config
        .global_config_loaded_from()
        .map(|p| p.display().to_string());
    let project = config
        .project_config_loaded_from()
        .map(|p| p.display().to_string());

    if ctx.json {
        output::json(&serde_json::json!({
            "registry_root": ctx.paths.registry_root(),
            "content_root": ctx.paths.content_root(),
            "default_document": ctx.paths.default_document(),
            "log_level": config.log_level(),
            "log_format": config.log_format(),
            "global_config": global,
            "project_config": project,
        }))?;
        return Ok(());
    }

    println!("registry_root    = {}", ctx.paths.registry_root().display());
    println!("content_root     = {}", ctx.paths.content_root().display());
    println!("default_document = {}", ctx.paths.default_document().display());
    println!("log.level        = {}", config.log_level());
    println!("log.format       = {}", config.log_format());
    output::print(
        format!(
            "\nglobal config:  {}\nproject config: {}",
            global.as_deref().unwrap_or("(none)"),
            project.as_deref().unwrap_or("(none)")
        ),
        ctx.verbosity,
    );
    Ok(())
}
