//! core::assets
//!
//! Mesh asset resolution.
//!
//! # Design
//!
//! The loader never interprets a record's `path`; it hands the string to an
//! [`AssetResolver`]. Resolution cannot fail loudly: an unknown path yields
//! `None` and the record is kept without a mesh.
//!
//! # Asset Paths
//!
//! [`ContentResolver`] understands engine-style object paths such as
//! `/Game/Props/Bench/SM_Bench.SM_Bench`. The object suffix after the last
//! `.` of the final segment is dropped to get the package path, which is then
//! looked up under the content root with each known mesh extension.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

/// File extensions tried when resolving a package path.
pub const MESH_EXTENSIONS: &[&str] = &["uasset", "fbx", "obj", "gltf", "glb"];

/// Opaque handle to a resolved mesh asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MeshHandle {
    asset_path: String,
    file: PathBuf,
}

impl MeshHandle {
    pub fn new(asset_path: impl Into<String>, file: PathBuf) -> Self {
        Self {
            asset_path: asset_path.into(),
            file,
        }
    }

    /// The asset path this handle was resolved from.
    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    /// The file backing the asset.
    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// Resolves an asset path string to a mesh handle.
///
/// Implementations must not panic and must return `None` on any failure.
pub trait AssetResolver {
    fn load_asset(&self, path: &str) -> Option<MeshHandle>;
}

impl<T: AssetResolver + ?Sized> AssetResolver for &T {
    fn load_asset(&self, path: &str) -> Option<MeshHandle> {
        (**self).load_asset(path)
    }
}

/// Resolver that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl AssetResolver for NoopResolver {
    fn load_asset(&self, _path: &str) -> Option<MeshHandle> {
        None
    }
}

/// Resolver backed by a content directory on disk.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    content_root: PathBuf,
}

impl ContentResolver {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Candidate files for an asset path, in lookup order.
    pub fn candidates(&self, path: &str) -> Vec<PathBuf> {
        let relative = path.trim().trim_start_matches('/');
        if relative.is_empty() {
            return Vec::new();
        }

        let mut candidates = vec![self.content_root.join(relative)];

        let package = package_path(relative);
        for ext in MESH_EXTENSIONS {
            candidates.push(self.content_root.join(format!("{}.{}", package, ext)));
        }
        candidates
    }
}

impl AssetResolver for ContentResolver {
    fn load_asset(&self, path: &str) -> Option<MeshHandle> {
        let found = self.candidates(path).into_iter().find(|c| c.is_file());
        match found {
            Some(file) => {
                debug!(asset = path, file = %file.display(), "resolved mesh asset");
                Some(MeshHandle::new(path, file))
            }
            None => {
                debug!(asset = path, root = %self.content_root.display(), "mesh asset not found");
                None
            }
        }
    }
}

/// Strip an `Object.Object` suffix from the last path segment.
fn package_path(relative: &str) -> &str {
    let segment_start = relative.rfind('/').map(|i| i + 1).unwrap_or(0);
    match relative[segment_start..].find('.') {
        Some(dot) => &relative[..segment_start + dot],
        None => relative,
    }
}
