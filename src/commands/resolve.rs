use anyhow::Result;
use log::debug;

use crate::{
    resolver::{Resolver, ResolverConfig},
    runtime::Runtime,
    search_path::SearchPaths,
};

/// One directory per line, or a JSON array when `json` is set.
pub fn render_paths(paths: &SearchPaths, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(paths)?);
    }
    Ok(paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Print the resolved include directories
#[tracing::instrument(skip(runtime, config))]
pub fn resolve<R: Runtime>(runtime: R, config: ResolverConfig, json: bool) -> Result<()> {
    let resolver = Resolver::new(runtime, config);
    let paths = resolver.paths()?;
    debug!("Resolved {} include path(s)", paths.len());

    let output = render_paths(paths, json)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
