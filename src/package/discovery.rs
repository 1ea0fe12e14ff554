use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::runtime::Runtime;

/// Build a `<root>/**/<file_pattern>` glob, escaping any metacharacters in `root`.
fn recursive_pattern(root: &Path, file_pattern: &str) -> Result<String> {
    let root_str = root
        .to_str()
        .ok_or_else(|| ResolveError::InvalidPattern(root.to_path_buf()))?;
    let root_str = root_str.trim_end_matches(['/', '\\']);
    Ok(format!(
        "{}/**/{}",
        glob::Pattern::escape(root_str),
        file_pattern
    ))
}

/// Find every manifest file under `root`, at any depth, in sorted path order.
///
/// Directory structure: `<root>/**/<manifest_name>`
#[tracing::instrument(skip(runtime))]
pub fn find_manifests<R: Runtime>(
    runtime: &R,
    root: &Path,
    manifest_name: &str,
) -> Result<Vec<PathBuf>> {
    let pattern = recursive_pattern(root, &glob::Pattern::escape(manifest_name))?;
    runtime.glob(&pattern)
}

/// Find every Sass partial (`_*.scss`) under `root`, at any depth, in sorted path order.
#[tracing::instrument(skip(runtime))]
pub fn find_partials<R: Runtime>(runtime: &R, root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = recursive_pattern(root, "_*.scss")?;
    Ok(runtime
        .glob(&pattern)?
        .into_iter()
        .filter(|p| !runtime.is_dir(p))
        .collect())
}

/// Immediate subdirectories of `root`: one per installed component.
#[tracing::instrument(skip(runtime))]
pub fn component_dirs<R: Runtime>(runtime: &R, root: &Path) -> Result<Vec<PathBuf>> {
    Ok(runtime
        .read_dir(root)?
        .into_iter()
        .filter(|p| runtime.is_dir(p))
        .collect())
}
