//! core::registry::discovery
//!
//! Finding registry documents and fixing their processing order.
//!
//! # Ordering
//!
//! Paths are sorted by their full string form, ignoring ASCII case. The
//! first path whose file name contains [`DEFAULT_MARKER`] (in any case) is
//! then moved to the front, so the base layer is always folded first and
//! every other layer can override it.
//!
//! ```
//! use prop_registry::core::registry::discovery::order_for_processing;
//! use std::path::PathBuf;
//!
//! let ordered = order_for_processing(vec![
//!     PathBuf::from("b.PropRegistry.json"),
//!     PathBuf::from("Default.PropRegistry.json"),
//!     PathBuf::from("a.PropRegistry.json"),
//! ]);
//! assert_eq!(ordered, vec![
//!     PathBuf::from("Default.PropRegistry.json"),
//!     PathBuf::from("a.PropRegistry.json"),
//!     PathBuf::from("b.PropRegistry.json"),
//! ]);
//! ```

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::schema::{DEFAULT_MARKER, REGISTRY_SUFFIX};

/// Recursively list every registry document under `root`.
///
/// The result is unordered. A missing root yields an empty list; entries
/// that cannot be read are logged and skipped.
pub fn find_registry_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        debug!(root = %root.display(), "registry root does not exist");
        return Vec::new();
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "skipping unreadable registry path");
                continue;
            }
        };

        if entry.file_type().is_file() && is_registry_file(entry.path()) {
            found.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = found.len(), "discovered registry files");
    found
}

/// Whether a path names a registry document.
pub fn is_registry_file(path: &Path) -> bool {
    file_name(path).is_some_and(|name| name.ends_with(REGISTRY_SUFFIX))
}

/// Whether a path names the base document.
///
/// The marker is matched ASCII case-insensitively against the file name.
pub fn is_default_document(path: &Path) -> bool {
    file_name(path).is_some_and(|name| {
        name.to_ascii_lowercase()
            .contains(&DEFAULT_MARKER.to_ascii_lowercase())
    })
}

/// Compare paths ASCII case-insensitively, falling back to byte order on ties.
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    let (a, b) = (a.to_string_lossy(), b.to_string_lossy());
    a.to_ascii_lowercase()
        .cmp(&b.to_ascii_lowercase())
        .then_with(|| a.cmp(&b))
}

/// Sort paths with [`compare_paths`], then move the base document to the front.
pub fn order_for_processing(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort_by(|a, b| compare_paths(a, b));

    if let Some(pos) = paths.iter().position(|p| is_default_document(p)) {
        let default = paths.remove(pos);
        paths.insert(0, default);
    }
    paths
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn default_first_then_lexicographic() {
        let ordered = order_for_processing(paths(&[
            "cfg/b.PropRegistry.json",
            "cfg/Default.PropRegistry.json",
            "cfg/a.PropRegistry.json",
        ]));
        assert_eq!(
            ordered,
            paths(&[
                "cfg/Default.PropRegistry.json",
                "cfg/a.PropRegistry.json",
                "cfg/b.PropRegistry.json",
            ])
        );
    }

    #[test]
    fn no_default_is_plain_sort() {
        let ordered = order_for_processing(paths(&["z.PropRegistry.json", "m.PropRegistry.json"]));
        assert_eq!(ordered, paths(&["m.PropRegistry.json", "z.PropRegistry.json"]));
    }

    #[test]
    fn only_first_default_is_promoted() {
        let ordered = order_for_processing(paths(&[
            "x/MyDefault.PropRegistry.json",
            "a/a.PropRegistry.json",
            "b/Default.PropRegistry.json",
        ]));
        assert_eq!(
            ordered,
            paths(&[
                "b/Default.PropRegistry.json",
                "a/a.PropRegistry.json",
                "x/MyDefault.PropRegistry.json",
            ])
        );
    }

    #[test]
    fn sort_ignores_ascii_case() {
        let ordered = order_for_processing(paths(&[
            "cfg/b.PropRegistry.json",
            "cfg/A.PropRegistry.json",
            "cfg/a2.PropRegistry.json",
            "cfg/Zone.PropRegistry.json",
        ]));
        assert_eq!(
            ordered,
            paths(&[
                "cfg/A.PropRegistry.json",
                "cfg/a2.PropRegistry.json",
                "cfg/b.PropRegistry.json",
                "cfg/Zone.PropRegistry.json",
            ])
        );
    }

    #[test]
    fn case_only_differences_sort_by_bytes() {
        let ordered = order_for_processing(paths(&["a.PropRegistry.json", "A.PropRegistry.json"]));
        assert_eq!(ordered, paths(&["A.PropRegistry.json", "a.PropRegistry.json"]));
    }

    #[test]
    fn lowercase_marker_is_promoted() {
        let ordered = order_for_processing(paths(&[
            "cfg/a.PropRegistry.json",
            "cfg/zdefault.PropRegistry.json",
        ]));
        assert_eq!(
            ordered,
            paths(&["cfg/zdefault.PropRegistry.json", "cfg/a.PropRegistry.json"])
        );
        assert!(is_default_document(Path::new("cfg/DEFAULT.PropRegistry.json")));
    }

    #[test]
    fn marker_in_directory_name_does_not_count() {
        assert!(!is_default_document(Path::new("Defaults/user.PropRegistry.json")));
        assert!(is_default_document(Path::new("cfg/Default.PropRegistry.json")));
    }

    #[test]
    fn empty_list_stays_empty() {
        assert!(order_for_processing(Vec::new()).is_empty());
    }

    #[test]
    fn finds_files_recursively_by_suffix() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("mods/forest");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("Default.PropRegistry.json"), "{}").unwrap();
        fs::write(nested.join("trees.PropRegistry.json"), "{}").unwrap();
        fs::write(nested.join("notes.json"), "{}").unwrap();
        fs::create_dir_all(temp.path().join("dir.PropRegistry.json")).unwrap();

        let mut found = find_registry_files(temp.path());
        found.sort();

        assert_eq!(
            found,
            vec![
                temp.path().join("Default.PropRegistry.json"),
                nested.join("trees.PropRegistry.json"),
            ]
        );
    }

    #[test]
    fn missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(find_registry_files(&temp.path().join("absent")).is_empty());
    }
}
