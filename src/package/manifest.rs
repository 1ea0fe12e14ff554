use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::runtime::Runtime;

/// The `main` field of a component manifest.
///
/// Bower allows a single path or a list of paths; both are normalized to a
/// list through [`MainEntry::into_paths`].
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum MainEntry {
    #[default]
    Absent,
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl MainEntry {
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            MainEntry::Absent => vec![],
            MainEntry::Single(path) => vec![path],
            MainEntry::Many(paths) => paths,
        }
    }
}

/// Installed component manifest (`.bower.json`). Only the fields the resolver needs.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: MainEntry,
}

impl Manifest {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let manifest = serde_json::from_str(content).map_err(|source| {
            ResolveError::ManifestParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(manifest)
    }

    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .map_err(|source| ResolveError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(path, &content)
    }

    /// Main entries whose extension is one of `extensions` (compared case-insensitively),
    /// in declaration order.
    pub fn style_entries(&self, extensions: &[String]) -> Vec<PathBuf> {
        self.main
            .clone()
            .into_paths()
            .into_iter()
            .filter(|entry| has_extension(entry, extensions))
            .collect()
    }
}

pub(crate) fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
