//! core::paths
//!
//! Path routing for registry storage.
//!
//! # Architecture
//!
//! Both roots are passed in explicitly. Nothing in this crate derives a
//! registry location from process-wide state; the CLI resolves the roots
//! from config and flags, then builds a [`RegistryPaths`].
//!
//! # Storage Layout
//!
//! - `<registry_root>/Default.PropRegistry.json` - Base layer, target of writes
//! - `<registry_root>/**/<layer>.PropRegistry.json` - Override layers
//! - `<content_root>/...` - Mesh assets referenced by `path`
//!
//! # Example
//!
//! ```
//! use prop_registry::core::paths::RegistryPaths;
//! use std::path::PathBuf;
//!
//! let paths = RegistryPaths::new("/project/Config", "/project/Content");
//! assert_eq!(
//!     paths.default_document(),
//!     PathBuf::from("/project/Config/Default.PropRegistry.json")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::core::registry::schema::{DEFAULT_MARKER, REGISTRY_SUFFIX};

/// Registry and content roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPaths {
    /// Directory searched (recursively) for registry documents.
    pub registry_root: PathBuf,

    /// Directory mesh asset paths are resolved against.
    pub content_root: PathBuf,
}

impl RegistryPaths {
    pub fn new(registry_root: impl Into<PathBuf>, content_root: impl Into<PathBuf>) -> Self {
        Self {
            registry_root: registry_root.into(),
            content_root: content_root.into(),
        }
    }

    pub fn registry_root(&self) -> &Path {
        &self.registry_root
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Path of the base document.
    pub fn default_document(&self) -> PathBuf {
        self.document_for(DEFAULT_MARKER)
    }

    /// Path of a named layer directly under the registry root.
    pub fn document_for(&self, layer: &str) -> PathBuf {
        self.registry_root.join(format!("{}{}", layer, REGISTRY_SUFFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_for_appends_suffix() {
        let paths = RegistryPaths::new("/cfg", "/content");
        assert_eq!(
            paths.document_for("user"),
            PathBuf::from("/cfg/user.PropRegistry.json")
        );
    }

    #[test]
    fn roots_are_kept_verbatim() {
        let paths = RegistryPaths::new("relative/cfg", "/abs/content");
        assert_eq!(paths.registry_root(), Path::new("relative/cfg"));
        assert_eq!(paths.content_root(), Path::new("/abs/content"));
    }
}
