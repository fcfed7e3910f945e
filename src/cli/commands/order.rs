//! order command - Show registry processing order

use anyhow::Result;

use super::Context;
use crate::core::assets::NoopResolver;
use crate::core::registry::discovery::is_default_document;
use crate::core::registry::RegistryLoader;
use crate::ui::output;

/// Print the processing order of discovered registry files.
pub fn order(ctx: &Context) -> Result<()> {
    let loader = RegistryLoader::new(ctx.paths.clone(), &NoopResolver);
    let files = loader.processing_order();

    if ctx.json {
        output::json(&files)?;
        return Ok(());
    }

    if files.is_empty() {
        output::print(
            format!(
                "No registry files under {}",
                ctx.paths.registry_root().display()
            ),
            ctx.verbosity,
        );
        return Ok(());
    }

    if !files.first().is_some_and(|f| is_default_document(f)) {
        output::warn("no Default registry file found", ctx.verbosity);
    }

    for (i, file) in files.iter().enumerate() {
        println!("{:>3}  {}", i + 1, file.display());
    }
    Ok(())
}
