use std::path::PathBuf;

use thiserror::Error;

/// Failures of include-path resolution.
///
/// Functions in this crate return `anyhow::Result`; these variants sit at the
/// root of the chain so callers can `downcast_ref` to tell them apart.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("component root {} does not exist", .0.display())]
    ComponentRootMissing(PathBuf),

    #[error("failed to read manifest {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no manifest or matching partial found for component {name:?} in {}", dir.display())]
    UnresolvedComponent { name: String, dir: PathBuf },

    #[error("cannot build a search pattern from {}", .0.display())]
    InvalidPattern(PathBuf),

    #[error("{var} is not valid unicode, refusing to replace it")]
    NonUnicodeSearchPath { var: String },

    #[error("search path value for {var} contains a NUL byte")]
    InvalidSearchPath { var: String },
}
