//! Best-effort placement of components that ship no manifest.
//!
//! A component directory with no manifest beneath it is matched by name against
//! every `_*.scss` partial under the component root; the partial's directory is
//! used as its include path. This is a heuristic: it only ever appends to the
//! set built from manifests and never replaces an entry.

use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::package::{component_dirs, find_partials};
use crate::runtime::Runtime;
use crate::search_path::SearchPaths;

/// Partial basename without the leading underscore and extension: `_grid.scss` -> `grid`.
fn partial_stem(partial: &Path) -> Option<String> {
    let stem = partial.file_stem()?.to_str()?;
    Some(stem.trim_start_matches('_').to_lowercase())
}

/// Shortest name allowed to match as a substring of the other side.
const MIN_SUBSTRING_LEN: usize = 3;

fn names_match(component: &str, stem: &str) -> bool {
    if component == stem {
        return true;
    }
    (component.len() >= MIN_SUBSTRING_LEN && stem.contains(component))
        || (stem.len() >= MIN_SUBSTRING_LEN && component.contains(stem))
}

/// Pick the partial for `component_dir`.
///
/// Ranking: partials inside the component's own directory first, then exact
/// name matches, then sorted path order.
fn best_partial<'a>(component_dir: &Path, name: &str, partials: &'a [PathBuf]) -> Option<&'a Path> {
    partials
        .iter()
        .enumerate()
        .filter_map(|(index, partial)| {
            let stem = partial_stem(partial)?;
            names_match(name, &stem).then(|| {
                let own = partial.starts_with(component_dir);
                let exact = stem == name;
                ((!own, !exact, index), partial.as_path())
            })
        })
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, partial)| partial)
}

/// Add include paths for components under `root` that none of `manifests` covers.
///
/// Returns an [`ResolveError::UnresolvedComponent`] for every component that
/// could not be placed; the caller decides how to report them.
#[tracing::instrument(skip(runtime, manifests, paths))]
pub fn resolve_by_partials<R: Runtime>(
    runtime: &R,
    root: &Path,
    manifests: &[PathBuf],
    paths: &mut SearchPaths,
) -> Result<Vec<ResolveError>> {
    let uncovered: Vec<PathBuf> = component_dirs(runtime, root)?
        .into_iter()
        .filter(|dir| !manifests.iter().any(|m| m.starts_with(dir)))
        .collect();

    if uncovered.is_empty() {
        return Ok(vec![]);
    }

    let partials = find_partials(runtime, root)?;
    debug!(
        "{} component(s) without manifest, {} partial(s) to match against",
        uncovered.len(),
        partials.len()
    );

    let mut unresolved = Vec::new();
    for dir in uncovered {
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let name = name.to_lowercase();

        match best_partial(&dir, &name, &partials).and_then(Path::parent) {
            Some(partial_dir) => {
                if paths.insert(partial_dir.to_path_buf()) {
                    info!(
                        "Component {} has no manifest, using partial directory {}",
                        name,
                        partial_dir.display()
                    );
                }
            }
            None => unresolved.push(ResolveError::UnresolvedComponent { name, dir }),
        }
    }

    Ok(unresolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partials(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_partial_stem() {
        assert_eq!(
            partial_stem(Path::new("/c/x/_grid.scss")).as_deref(),
            Some("grid")
        );
        assert_eq!(
            partial_stem(Path::new("/c/x/_Font-Awesome.scss")).as_deref(),
            Some("font-awesome")
        );
    }

    #[test]
    fn test_best_partial_prefers_own_directory() {
        let list = partials(&["/c/a/_neat.scss", "/c/neat/scss/_neat-helpers.scss"]);
        let found = best_partial(Path::new("/c/neat"), "neat", &list);
        assert_eq!(found, Some(Path::new("/c/neat/scss/_neat-helpers.scss")));
    }

    #[test]
    fn test_best_partial_prefers_exact_name() {
        let list = partials(&["/c/x/_bourbon-deprecated.scss", "/c/y/_bourbon.scss"]);
        let found = best_partial(Path::new("/c/bourbon"), "bourbon", &list);
        assert_eq!(found, Some(Path::new("/c/y/_bourbon.scss")));
    }

    #[test]
    fn test_best_partial_substring_either_way() {
        let list = partials(&["/c/vendor/_bootstrap.scss"]);
        let found = best_partial(Path::new("/c/bootstrap-sass"), "bootstrap-sass", &list);
        assert_eq!(found, Some(Path::new("/c/vendor/_bootstrap.scss")));
    }

    #[test]
    fn test_short_stem_does_not_match_inside_name() {
        assert!(!names_match("jquery", "q"));
        assert!(names_match("jquery", "jquery-ui"));
        assert!(names_match("font-awesome", "awesome"));
    }

    #[test]
    fn test_short_component_name_does_not_match_inside_stem() {
        assert!(!names_match("ui", "guide"));
        assert!(names_match("ui", "ui"));

        let list = partials(&["/c/styleguide/scss/_guide.scss"]);
        assert_eq!(best_partial(Path::new("/c/ui"), "ui", &list), None);
    }

    #[test]
    fn test_best_partial_none() {
        let list = partials(&["/c/x/_grid.scss"]);
        assert_eq!(best_partial(Path::new("/c/jquery"), "jquery", &list), None);
    }
}
