use std::path::PathBuf;

/// Default directory holding installed components, relative to the working directory.
pub const DEFAULT_COMPONENT_ROOT: &str = "bower_components";
pub const DEFAULT_MANIFEST_NAME: &str = ".bower.json";
pub const DEFAULT_SEARCH_PATH_VAR: &str = "SASS_PATH";
pub const DEFAULT_STYLE_EXTENSIONS: [&str; 2] = ["scss", "sass"];

/// What to do with a manifest that cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestErrorPolicy {
    /// Log a warning naming the file and leave the package out.
    #[default]
    Warn,
    /// Stop resolution with the error.
    Abort,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Directory scanned for manifests. A relative path is taken from the current directory.
    pub component_root: PathBuf,
    /// File name of the per-package manifest.
    pub manifest_name: String,
    /// Main entries with one of these extensions contribute a directory.
    pub extensions: Vec<String>,
    pub on_manifest_error: ManifestErrorPolicy,
    /// Try to place manifest-less components through a matching `_<name>.scss` partial.
    pub partial_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            component_root: PathBuf::from(DEFAULT_COMPONENT_ROOT),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            extensions: DEFAULT_STYLE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            on_manifest_error: ManifestErrorPolicy::default(),
            partial_fallback: true,
        }
    }
}

impl ResolverConfig {
    pub fn with_root(component_root: impl Into<PathBuf>) -> Self {
        Self {
            component_root: component_root.into(),
            ..Self::default()
        }
    }
}
