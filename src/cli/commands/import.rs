//! import command - Upsert every prop of a file into the Default registry file

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::registry::{RegistryDocument, RegistryWriter};
use crate::ui::output;

/// Import the `definitions` of `file` into the Default document.
pub fn import(ctx: &Context, file: &Path) -> Result<()> {
    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let records = RegistryDocument::parse(&text)
        .and_then(|doc| doc.records())
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let report = RegistryWriter::merge(&ctx.paths.default_document(), records)
        .context("Failed to write registry")?;

    if ctx.json {
        output::json(&serde_json::json!({
            "path": report.path,
            "inserted": report.inserted,
            "updated": report.updated,
        }))?;
    } else {
        output::print(
            format!(
                "Imported into {}: {} added, {} updated",
                report.path.display(),
                report.inserted.len(),
                report.updated.len()
            ),
            ctx.verbosity,
        );
    }
    Ok(())
}
