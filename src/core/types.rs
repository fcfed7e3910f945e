//! core::types
//!
//! Domain types for prop registry entries.
//!
//! # Types
//!
//! - [`PropSize`] - Closed size class with an explicit string table
//! - [`PropRecord`] - One named registry entry (the merge unit)
//! - [`MeshRef`] - Mesh supplied by a writer caller (handle or raw path)
//! - [`PropParameters`] - Incoming writer item
//!
//! # Size Strings
//!
//! [`PropSize::TABLE`] is the single mapping between variants and their
//! canonical strings. Reading is lenient: anything not in the table maps to
//! [`PropSize::Invalid`]. Only the CLI uses the strict [`FromStr`] form.
//!
//! # Examples
//!
//! ```
//! use prop_registry::core::types::PropSize;
//!
//! assert_eq!(PropSize::parse_lenient("Small"), PropSize::Small);
//! assert_eq!(PropSize::parse_lenient("huge"), PropSize::Huge);
//! assert_eq!(PropSize::parse_lenient("Colossal"), PropSize::Invalid);
//! assert_eq!(PropSize::Big.as_str(), "Big");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::core::assets::MeshHandle;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown prop size '{found}', must be one of: {}", PropSize::known_names().join(", "))]
    UnknownSize { found: String },

    #[error("prop name cannot be empty")]
    EmptyName,
}

/// Size class of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropSize {
    Tiny,
    Small,
    Medium,
    Big,
    Huge,
    /// Sentinel for sizes that could not be recognised.
    #[default]
    Invalid,
}

impl PropSize {
    /// Bidirectional mapping between variants and canonical strings.
    pub const TABLE: &'static [(PropSize, &'static str)] = &[
        (PropSize::Tiny, "Tiny"),
        (PropSize::Small, "Small"),
        (PropSize::Medium, "Medium"),
        (PropSize::Big, "Big"),
        (PropSize::Huge, "Huge"),
        (PropSize::Invalid, "INVALID"),
    ];

    /// Canonical string for this size, as written to registry files.
    pub fn as_str(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(size, _)| *size == self)
            .map(|(_, name)| *name)
            .unwrap_or("INVALID")
    }

    /// Look up a size by name (ASCII case-insensitive).
    ///
    /// Returns `None` for strings outside the table.
    pub fn lookup(name: &str) -> Option<PropSize> {
        Self::TABLE
            .iter()
            .find(|(_, canonical)| canonical.eq_ignore_ascii_case(name))
            .map(|(size, _)| *size)
    }

    /// Parse a size string, mapping anything unrecognised to `Invalid`.
    pub fn parse_lenient(name: &str) -> PropSize {
        Self::lookup(name).unwrap_or(PropSize::Invalid)
    }

    /// Whether this is a real size class rather than the sentinel.
    pub fn is_valid(self) -> bool {
        self != PropSize::Invalid
    }

    /// Names of the real size classes, in table order.
    pub fn known_names() -> Vec<&'static str> {
        Self::TABLE
            .iter()
            .filter(|(size, _)| size.is_valid())
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Display for PropSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropSize {
    type Err = TypeError;

    /// Strict parse: only real size classes are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::lookup(s) {
            Some(size) if size.is_valid() => Ok(size),
            _ => Err(TypeError::UnknownSize {
                found: s.to_string(),
            }),
        }
    }
}

impl Serialize for PropSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PropSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PropSize::parse_lenient(&s))
    }
}

/// One named entry in a registry document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropRecord {
    /// Unique key within a document. Stored verbatim.
    pub name: String,

    /// Asset path identifier, interpreted only by the asset resolver.
    #[serde(rename = "path")]
    pub mesh_path: String,

    /// Size class.
    pub size: PropSize,
}

impl PropRecord {
    pub fn new(name: impl Into<String>, mesh_path: impl Into<String>, size: PropSize) -> Self {
        Self {
            name: name.into(),
            mesh_path: mesh_path.into(),
            size,
        }
    }
}

/// Mesh supplied by a writer caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshRef {
    /// An already-resolved mesh.
    Handle(MeshHandle),
    /// A raw asset path.
    Path(String),
}

impl MeshRef {
    /// The asset path persisted under the record's `path` field.
    pub fn path_name(&self) -> &str {
        match self {
            MeshRef::Handle(handle) => handle.asset_path(),
            MeshRef::Path(path) => path,
        }
    }
}

impl From<MeshHandle> for MeshRef {
    fn from(handle: MeshHandle) -> Self {
        MeshRef::Handle(handle)
    }
}

impl From<&str> for MeshRef {
    fn from(path: &str) -> Self {
        MeshRef::Path(path.to_string())
    }
}

impl From<String> for MeshRef {
    fn from(path: String) -> Self {
        MeshRef::Path(path)
    }
}

/// Prop parameters handed to the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropParameters {
    pub name: String,
    pub mesh: MeshRef,
    pub size: PropSize,
}

impl PropParameters {
    pub fn new(name: impl Into<String>, mesh: impl Into<MeshRef>, size: PropSize) -> Self {
        Self {
            name: name.into(),
            mesh: mesh.into(),
            size,
        }
    }
}

impl From<PropParameters> for PropRecord {
    fn from(params: PropParameters) -> Self {
        PropRecord {
            mesh_path: params.mesh.path_name().to_string(),
            name: params.name,
            size: params.size,
        }
    }
}

impl From<&PropParameters> for PropRecord {
    fn from(params: &PropParameters) -> Self {
        PropRecord {
            name: params.name.clone(),
            mesh_path: params.mesh.path_name().to_string(),
            size: params.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    mod prop_size {
        use super::*;

        #[test]
        fn table_covers_every_variant_once() {
            let all = [
                PropSize::Tiny,
                PropSize::Small,
                PropSize::Medium,
                PropSize::Big,
                PropSize::Huge,
                PropSize::Invalid,
            ];
            for size in all {
                let hits = PropSize::TABLE.iter().filter(|(s, _)| *s == size).count();
                assert_eq!(hits, 1, "{:?} must appear exactly once", size);
            }
        }

        #[test]
        fn canonical_names_roundtrip() {
            for (size, name) in PropSize::TABLE {
                assert_eq!(size.as_str(), *name);
                assert_eq!(PropSize::parse_lenient(name), *size);
            }
        }

        #[test]
        fn lenient_parse_ignores_ascii_case() {
            assert_eq!(PropSize::parse_lenient("medium"), PropSize::Medium);
            assert_eq!(PropSize::parse_lenient("BIG"), PropSize::Big);
            assert_eq!(PropSize::parse_lenient("invalid"), PropSize::Invalid);
        }

        #[test]
        fn unknown_maps_to_invalid() {
            assert_eq!(PropSize::parse_lenient("Colossal"), PropSize::Invalid);
            assert_eq!(PropSize::parse_lenient(""), PropSize::Invalid);
            assert_eq!(PropSize::parse_lenient(" Small"), PropSize::Invalid);
        }

        #[test]
        fn strict_parse_rejects_unknown_and_sentinel() {
            assert_eq!("Small".parse::<PropSize>(), Ok(PropSize::Small));
            assert!("Colossal".parse::<PropSize>().is_err());
            assert!("INVALID".parse::<PropSize>().is_err());
        }

        #[test]
        fn strict_parse_error_lists_known_sizes() {
            let err = "Colossal".parse::<PropSize>().unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("Colossal"));
            assert!(msg.contains("Tiny, Small, Medium, Big, Huge"));
        }

        #[test]
        fn serde_is_lenient() {
            let size: PropSize = serde_json::from_str("\"Colossal\"").unwrap();
            assert_eq!(size, PropSize::Invalid);
            assert_eq!(serde_json::to_string(&PropSize::Huge).unwrap(), "\"Huge\"");
        }
    }

    mod mesh_ref {
        use super::*;

        #[test]
        fn path_name_from_handle() {
            let handle = MeshHandle::new("/Game/Props/Bench.Bench", PathBuf::from("/c/Bench.uasset"));
            let mesh = MeshRef::from(handle);
            assert_eq!(mesh.path_name(), "/Game/Props/Bench.Bench");
        }

        #[test]
        fn params_into_record() {
            let params = PropParameters::new("bench", "/Game/Props/Bench", PropSize::Small);
            let record = PropRecord::from(&params);
            assert_eq!(record, PropRecord::new("bench", "/Game/Props/Bench", PropSize::Small));
        }
    }

    #[test]
    fn record_serializes_path_field() {
        let record = PropRecord::new("bench", "/Game/Bench", PropSize::Big);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "bench", "path": "/Game/Bench", "size": "Big" })
        );
    }
}
