//! list command - Show the merged props

use anyhow::Result;

use super::Context;
use crate::core::registry::RegistryLoader;
use crate::ui::output;

/// List the folded props of every registry file.
pub fn list(ctx: &Context, resolve: bool) -> Result<()> {
    let resolver = ctx.resolver(resolve);
    let loader = RegistryLoader::new(ctx.paths.clone(), resolver.as_ref());
    let outcome = loader.load_all();

    if ctx.json {
        output::json(&outcome)?;
        return Ok(());
    }

    for skipped in &outcome.skipped {
        output::warn(
            format!("skipped {}: {}", skipped.path.display(), skipped.reason),
            ctx.verbosity,
        );
    }

    if outcome.props.is_empty() {
        output::print(
            format!("No props found under {}", ctx.paths.registry_root().display()),
            ctx.verbosity,
        );
    } else {
        println!("{}", output::format_props(&outcome.props));
    }
    Ok(())
}
