//! core::registry::writer
//!
//! Merge incoming records into the base registry document.
//!
//! # Algorithm
//!
//! 1. Read the base document. Absent or unparsable means start empty.
//! 2. Index the existing `definitions` array by name (first occurrence wins).
//! 3. Upsert each incoming record in input order: replace in place when the
//!    name is known, append otherwise.
//! 4. Store the array back and rewrite the whole file atomically.
//!
//! Only the final write can fail. Read-side problems degrade to an empty
//! base and are logged.
//!
//! # Example
//!
//! ```no_run
//! use prop_registry::core::registry::writer::RegistryWriter;
//! use prop_registry::core::types::{PropRecord, PropSize};
//! use std::path::Path;
//!
//! let report = RegistryWriter::merge(
//!     Path::new("Config/Default.PropRegistry.json"),
//!     vec![PropRecord::new("bench", "/Game/Props/SM_Bench.SM_Bench", PropSize::Small)],
//! )?;
//! println!("inserted {}, updated {}", report.inserted.len(), report.updated.len());
//! # Ok::<(), prop_registry::core::registry::writer::WriteError>(())
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::schema::{record_name, record_to_object, RegistryDocument};
use crate::core::keyed::{KeyedList, Upsert};
use crate::core::paths::RegistryPaths;
use crate::core::types::{PropParameters, PropRecord};

/// Errors from persisting a registry document.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write registry file '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to serialize registry document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What a merge changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// The file that was written.
    pub path: PathBuf,
    /// Names appended to the document, in order.
    pub inserted: Vec<String>,
    /// Names replaced in place, in order of the incoming records.
    pub updated: Vec<String>,
}

/// Writes records into the base registry document.
#[derive(Debug, Clone)]
pub struct RegistryWriter {
    paths: RegistryPaths,
}

impl RegistryWriter {
    pub fn new(paths: RegistryPaths) -> Self {
        Self { paths }
    }

    /// Merge writer parameters into the default document under the registry root.
    pub fn write_props<I>(&self, params: I) -> Result<MergeReport, WriteError>
    where
        I: IntoIterator<Item = PropParameters>,
    {
        let records = params.into_iter().map(PropRecord::from);
        Self::merge(&self.paths.default_document(), records)
    }

    /// Merge records into the document at `base_path` and rewrite it.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError`] if the document cannot be serialized or written.
    /// A missing or unreadable base document is not an error.
    pub fn merge<I>(base_path: &Path, records: I) -> Result<MergeReport, WriteError>
    where
        I: IntoIterator<Item = PropRecord>,
    {
        let mut doc = read_base(base_path);
        let existing = doc.take_definitions();

        let mut list = KeyedList::with_capacity(existing.len());
        for item in existing {
            match record_name(&item).map(str::to_owned) {
                Some(name) => {
                    list.index_existing(name, item);
                }
                None => {
                    list.push_unkeyed(item);
                }
            }
        }

        let mut report = MergeReport {
            path: base_path.to_path_buf(),
            ..Default::default()
        };

        for record in records {
            let object = record_to_object(&record, list.get(&record.name));
            match list.upsert(record.name.clone(), object) {
                Upsert::Inserted(pos) => {
                    debug!(name = %record.name, pos, "appending prop");
                    report.inserted.push(record.name);
                }
                Upsert::Replaced(pos) => {
                    debug!(name = %record.name, pos, "updating prop in place");
                    report.updated.push(record.name);
                }
            }
        }

        doc.set_definitions(list.into_vec());
        let contents = doc.to_json_string()?;
        write_atomic(base_path, &contents)?;

        info!(
            path = %base_path.display(),
            inserted = report.inserted.len(),
            updated = report.updated.len(),
            "registry document written"
        );
        Ok(report)
    }
}

/// Read the base document, degrading to an empty one.
fn read_base(path: &Path) -> RegistryDocument {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "base registry document absent, starting empty");
            return RegistryDocument::empty();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read base registry document, starting empty");
            return RegistryDocument::empty();
        }
    };

    match RegistryDocument::parse(&text) {
        Ok(doc) => {
            if doc.definitions().is_none() {
                debug!(path = %path.display(), "base document has no definitions array");
            }
            doc
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot parse base registry document, starting empty");
            RegistryDocument::empty()
        }
    }
}

/// Write a file atomically: temp file in the same directory, sync, rename.
fn write_atomic(path: &Path, contents: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(path))?;
    }

    let temp_path = temp_path_for(path);
    let result = write_and_rename(&temp_path, path, contents);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_rename(temp_path: &Path, path: &Path, contents: &str) -> Result<(), WriteError> {
    let mut file = fs::File::create(temp_path).map_err(io_error(temp_path))?;
    file.write_all(contents.as_bytes()).map_err(io_error(temp_path))?;
    file.sync_all().map_err(io_error(temp_path))?;
    drop(file);

    fs::rename(temp_path, path).map_err(io_error(path))?;
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> WriteError {
    let path = path.to_path_buf();
    move |source| WriteError::Io { path, source }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
