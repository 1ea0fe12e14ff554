use anyhow::Result;

use crate::{
    resolver::{Resolver, ResolverConfig},
    runtime::Runtime,
};

/// POSIX shell line assigning `value` to `var`, single-quoted.
pub fn render_export(var: &str, value: &str) -> String {
    format!("export {}='{}'", var, value.replace('\'', r"'\''"))
}

/// Print the search-path variable with the resolved directories merged in
#[tracing::instrument(skip(runtime, config))]
pub fn env<R: Runtime>(runtime: R, config: ResolverConfig, var: &str, export: bool) -> Result<()> {
    let resolver = Resolver::new(runtime, config);
    let value = resolver.merged_search_path(var)?;

    if export {
        println!("{}", render_export(var, &value));
    } else {
        println!("{}", value);
    }
    Ok(())
}
