//! Include-path resolution.
//!
//! Scans a component root for package manifests and turns each package's
//! style main entries into directories a Sass compiler can search.

mod config;
mod fallback;

use anyhow::Result;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::package::{Manifest, find_manifests};
use crate::runtime::{Runtime, absolutize, normalize_path, path::parent_or_empty};
use crate::search_path::{SearchPaths, merge_into_search_path};

pub use config::{
    DEFAULT_COMPONENT_ROOT, DEFAULT_MANIFEST_NAME, DEFAULT_SEARCH_PATH_VAR,
    DEFAULT_STYLE_EXTENSIONS, ManifestErrorPolicy, ResolverConfig,
};
pub use fallback::resolve_by_partials;

/// Absolute, normalized component root. Fails if it is not an existing directory.
fn component_root<R: Runtime>(runtime: &R, config: &ResolverConfig) -> Result<PathBuf> {
    let root = if config.component_root.is_absolute() {
        normalize_path(&config.component_root)
    } else {
        absolutize(&runtime.current_dir()?, &config.component_root)
    };

    if !runtime.is_dir(&root) {
        return Err(ResolveError::ComponentRootMissing(root).into());
    }
    Ok(root)
}

/// Load a manifest, applying the configured error policy.
/// `Ok(None)` means the manifest was skipped.
fn load_manifest<R: Runtime>(
    runtime: &R,
    path: &Path,
    policy: ManifestErrorPolicy,
) -> Result<Option<Manifest>> {
    match Manifest::load(runtime, path) {
        Ok(manifest) => Ok(Some(manifest)),
        Err(e) if policy == ManifestErrorPolicy::Warn => {
            warn!("Skipping package: {:#}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Compute the include directories for every package under the configured component root.
///
/// Each manifest's style main entries contribute `<manifest dir>/<dirname(entry)>`;
/// the result keeps the first occurrence of every directory in manifest order.
/// Components reached only through the partial fallback come after all of those.
#[tracing::instrument(skip(runtime))]
pub fn resolve<R: Runtime>(runtime: &R, config: &ResolverConfig) -> Result<SearchPaths> {
    let root = component_root(runtime, config)?;
    let manifests = find_manifests(runtime, &root, &config.manifest_name)?;
    debug!(
        "Found {} manifest(s) under {}",
        manifests.len(),
        root.display()
    );

    let mut paths = SearchPaths::new();
    for manifest_path in &manifests {
        let Some(manifest) = load_manifest(runtime, manifest_path, config.on_manifest_error)? else {
            continue;
        };
        let package_dir = parent_or_empty(manifest_path);

        let entries = manifest.style_entries(&config.extensions);
        if entries.is_empty() {
            debug!(
                "{} declares no style main entry",
                manifest.name.as_deref().unwrap_or("package")
            );
        }

        for entry in entries {
            let dir = normalize_path(&package_dir.join(parent_or_empty(&entry)));
            debug!("{} -> {}", entry.display(), dir.display());
            paths.insert(dir);
        }
    }

    if config.partial_fallback {
        for unresolved in resolve_by_partials(runtime, &root, &manifests, &mut paths)? {
            warn!("{}", unresolved);
        }
    }

    Ok(paths)
}

/// Resolver bound to a runtime and configuration.
///
/// The directory scan runs on the first call to [`Resolver::paths`]; later
/// calls return the same set.
pub struct Resolver<R: Runtime> {
    runtime: R,
    config: ResolverConfig,
    paths: OnceCell<SearchPaths>,
}

impl<R: Runtime> Resolver<R> {
    pub fn new(runtime: R, config: ResolverConfig) -> Self {
        Self {
            runtime,
            config,
            paths: OnceCell::new(),
        }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn paths(&self) -> Result<&SearchPaths> {
        self.paths
            .get_or_try_init(|| resolve(&self.runtime, &self.config))
    }

    /// Current value of `var` with the resolved directories merged in.
    ///
    /// An unset variable counts as empty. A non-unicode value is an error:
    /// the merged string could not carry its entries over.
    pub fn merged_search_path(&self, var: &str) -> Result<String> {
        let existing = match self.runtime.env_var(var) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(ResolveError::NonUnicodeSearchPath {
                    var: var.to_string(),
                }
                .into());
            }
        };
        let paths = self.paths()?;
        Ok(merge_into_search_path(
            existing.as_deref(),
            paths.as_slice(),
        ))
    }
}
