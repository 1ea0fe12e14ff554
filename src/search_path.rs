//! Ordered, de-duplicated directory lists and the `SASS_PATH`-style value built from them.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

/// Separator between entries of a search-path environment value.
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';

/// Ordered set of directories. Insertion keeps the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchPaths {
    paths: Vec<PathBuf>,
    #[serde(skip)]
    seen: HashSet<PathBuf>,
}

impl SearchPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` unless it is already present. Returns true if it was added.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.paths.push(path);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<PathBuf> for SearchPaths {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut set = SearchPaths::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

/// Merge `new_paths` into an existing search-path value.
///
/// The existing value is split on [`PATH_SEPARATOR`], the new paths are appended,
/// empty entries are dropped and duplicates removed keeping the first occurrence.
/// Applying it again to its own output with the same `new_paths` is a no-op.
pub fn merge_into_search_path(existing: Option<&str>, new_paths: &[PathBuf]) -> String {
    let existing_entries = existing
        .into_iter()
        .flat_map(|value| value.split(PATH_SEPARATOR))
        .map(str::to_string);
    let new_entries = new_paths.iter().map(|p| p.to_string_lossy().into_owned());

    let mut seen = HashSet::new();
    existing_entries
        .chain(new_entries)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(entry.clone()))
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR.to_string().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep(parts: &[&str]) -> String {
        parts.join(PATH_SEPARATOR.to_string().as_str())
    }

    #[test]
    fn test_search_paths_keeps_first_occurrence() {
        let paths: SearchPaths = ["/a", "/b", "/a", "/c", "/b"]
            .into_iter()
            .map(PathBuf::from)
            .collect();

        assert_eq!(
            paths.as_slice(),
            &[
                PathBuf::from("/a"),
                PathBuf::from("/b"),
                PathBuf::from("/c")
            ]
        );
    }

    #[test]
    fn test_search_paths_insert_reports_new() {
        let mut paths = SearchPaths::new();
        assert!(paths.insert(PathBuf::from("/a")));
        assert!(!paths.insert(PathBuf::from("/a")));
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_search_paths_serializes_as_list() {
        let paths: SearchPaths = vec![PathBuf::from("/a"), PathBuf::from("/b")]
            .into_iter()
            .collect();
        assert_eq!(serde_json::to_string(&paths).unwrap(), r#"["/a","/b"]"#);
    }

    #[test]
    fn test_merge_without_existing() {
        let merged = merge_into_search_path(None, &[PathBuf::from("/x"), PathBuf::from("/y")]);
        assert_eq!(merged, sep(&["/x", "/y"]));
    }

    #[test]
    fn test_merge_drops_duplicates_of_existing() {
        let existing = sep(&["/a", "/b"]);
        let merged = merge_into_search_path(
            Some(existing.as_str()),
            &[PathBuf::from("/b"), PathBuf::from("/c")],
        );
        assert_eq!(merged, sep(&["/a", "/b", "/c"]));
    }

    #[test]
    fn test_merge_drops_empty_entries() {
        let existing = sep(&["", "/a", "", "/a"]);
        let merged = merge_into_search_path(Some(existing.as_str()), &[PathBuf::new()]);
        assert_eq!(merged, "/a");
    }

    #[test]
    fn test_merge_empty_everything() {
        assert_eq!(merge_into_search_path(None, &[]), "");
        assert_eq!(merge_into_search_path(Some(""), &[]), "");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let new_paths = vec![PathBuf::from("/b"), PathBuf::from("/c")];
        let existing = sep(&["/a", "/b"]);

        let once = merge_into_search_path(Some(existing.as_str()), &new_paths);
        let twice = merge_into_search_path(Some(once.as_str()), &new_paths);
        assert_eq!(once, twice);
        assert_eq!(
            merge_into_search_path(Some(existing.as_str()), &new_paths),
            once
        );
    }
}
