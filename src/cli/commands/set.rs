//! set command - Upsert one prop into the Default registry file

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::core::registry::RegistryWriter;
use crate::core::types::{PropParameters, PropSize, TypeError};
use crate::ui::output;

/// Add or update a single prop.
pub fn set(ctx: &Context, name: String, path: String, size: PropSize) -> Result<()> {
    if name.is_empty() {
        bail!(TypeError::EmptyName);
    }

    let writer = RegistryWriter::new(ctx.paths.clone());
    let report = writer
        .write_props([PropParameters::new(name.clone(), path, size)])
        .context("Failed to write registry")?;

    if ctx.json {
        output::json(&serde_json::json!({
            "path": report.path,
            "inserted": report.inserted,
            "updated": report.updated,
        }))?;
    } else {
        let verb = if report.updated.is_empty() { "Added" } else { "Updated" };
        output::print(
            format!("{} '{}' in {}", verb, name, report.path.display()),
            ctx.verbosity,
        );
    }
    Ok(())
}
