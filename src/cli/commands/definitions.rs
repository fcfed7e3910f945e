//! definitions command - Build actor definitions from the merged props

use anyhow::Result;

use super::Context;
use crate::core::definitions::PropDefinitionBuilder;
use crate::core::registry::RegistryLoader;
use crate::ui::output;

/// Print the actor definitions built from the folded registry.
pub fn definitions(ctx: &Context) -> Result<()> {
    let resolver = ctx.resolver(true);
    let loader = RegistryLoader::new(ctx.paths.clone(), resolver.as_ref());
    let definitions = loader.load_props(&PropDefinitionBuilder);

    if ctx.json {
        output::json(&definitions)?;
        return Ok(());
    }

    let ids: Vec<&str> = definitions.iter().map(|d| d.id.as_str()).collect();
    if ids.is_empty() {
        output::print("No definitions", ctx.verbosity);
    } else {
        println!("{}", output::format_list(&ids, ""));
    }
    Ok(())
}
