//! core::registry::loader
//!
//! Fold every registry document into one override-applied prop list.
//!
//! # Algorithm
//!
//! 1. Discover `*.PropRegistry.json` under the registry root.
//! 2. Order them: lexicographic, base document first.
//! 3. For each file, parse its `definitions` and upsert every record into a
//!    single [`KeyedList`] shared across all files. Later files win.
//! 4. Hand the result to a [`DefinitionBuilder`].
//!
//! # Tolerance
//!
//! Nothing here aborts the load. Unreadable or malformed files are skipped
//! and reported in [`LoadOutcome::skipped`]; unresolvable meshes become
//! `None`; unknown sizes become [`PropSize::Invalid`](crate::core::types::PropSize::Invalid).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::discovery::{find_registry_files, order_for_processing};
use super::schema::{record_from_value, RegistryDocument, DEFINITIONS};
use crate::core::assets::{AssetResolver, MeshHandle};
use crate::core::definitions::{ActorDefinition, DefinitionBuilder};
use crate::core::keyed::{KeyedList, Upsert};
use crate::core::paths::RegistryPaths;
use crate::core::types::PropRecord;

/// A record after the fold, with its resolved mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedProp {
    #[serde(flatten)]
    pub record: PropRecord,

    /// `None` when the asset resolver could not find the mesh.
    pub mesh: Option<MeshHandle>,

    /// The file whose values won.
    pub source: PathBuf,
}

impl LoadedProp {
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Why a registry file was left out of the fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    Unreadable(String),
    Malformed(String),
    MissingDefinitions,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(e) => write!(f, "unreadable: {}", e),
            SkipReason::Malformed(e) => write!(f, "malformed: {}", e),
            SkipReason::MissingDefinitions => write!(f, "no '{}' array", DEFINITIONS),
        }
    }
}

/// A registry file that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of a full load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadOutcome {
    /// Folded props, unique by name, in first-appearance order.
    pub props: Vec<LoadedProp>,
    /// Files in the order they were processed (including skipped ones).
    pub files: Vec<PathBuf>,
    /// Files that contributed nothing.
    pub skipped: Vec<SkippedFile>,
}

impl LoadOutcome {
    pub fn get(&self, name: &str) -> Option<&LoadedProp> {
        self.props.iter().find(|p| p.name() == name)
    }
}

/// Loads and folds all registry documents under a root.
pub struct RegistryLoader<'a> {
    paths: RegistryPaths,
    resolver: &'a dyn AssetResolver,
}

impl<'a> RegistryLoader<'a> {
    pub fn new(paths: RegistryPaths, resolver: &'a dyn AssetResolver) -> Self {
        Self { paths, resolver }
    }

    /// The processing order for the documents currently on disk.
    pub fn processing_order(&self) -> Vec<PathBuf> {
        order_for_processing(find_registry_files(self.paths.registry_root()))
    }

    /// Discover, order, and fold every registry document.
    pub fn load_all(&self) -> LoadOutcome {
        let files = self.processing_order();
        self.load_files(files)
    }

    /// Fold the given files in the given order.
    pub fn load_files(&self, files: Vec<PathBuf>) -> LoadOutcome {
        let mut folded: KeyedList<LoadedProp> = KeyedList::new();
        let mut skipped = Vec::new();

        for path in &files {
            match read_document(path) {
                Ok(items) => self.fold_file(path, &items, &mut folded),
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "skipping registry file");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason,
                    });
                }
            }
        }

        info!(
            files = files.len(),
            skipped = skipped.len(),
            props = folded.len(),
            "registry loaded"
        );

        LoadOutcome {
            props: folded.into_vec(),
            files,
            skipped,
        }
    }

    /// Load everything and build actor definitions from it.
    pub fn load_props(&self, builder: &dyn DefinitionBuilder) -> Vec<ActorDefinition> {
        let outcome = self.load_all();
        builder.build(&outcome.props)
    }

    fn fold_file(
        &self,
        path: &Path,
        items: &[serde_json::Value],
        folded: &mut KeyedList<LoadedProp>,
    ) {
        for item in items {
            let Some(record) = record_from_value(item) else {
                warn!(path = %path.display(), "skipping registry entry without name or path");
                continue;
            };

            let mesh = self.resolver.load_asset(&record.mesh_path);
            if mesh.is_none() {
                warn!(name = %record.name, asset = %record.mesh_path, "mesh asset not resolved");
            }

            let name = record.name.clone();
            let prop = LoadedProp {
                record,
                mesh,
                source: path.to_path_buf(),
            };
            match folded.upsert(name.clone(), prop) {
                Upsert::Replaced(_) => {
                    debug!(%name, path = %path.display(), "prop overridden");
                }
                Upsert::Inserted(_) => {
                    debug!(%name, path = %path.display(), "prop added");
                }
            }
        }
    }
}

/// Read a document and return its definitions array.
fn read_document(path: &Path) -> Result<Vec<serde_json::Value>, SkipReason> {
    let text = fs::read_to_string(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    let mut doc = RegistryDocument::parse(&text).map_err(|e| SkipReason::Malformed(e.to_string()))?;
    if doc.definitions().is_none() {
        return Err(SkipReason::MissingDefinitions);
    }
    Ok(doc.take_definitions())
}
