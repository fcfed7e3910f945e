//! core::registry::schema
//!
//! On-disk registry document schema.
//!
//! # Format
//!
//! ```json
//! {
//!   "definitions": [
//!     { "name": "bench", "path": "/Game/Props/SM_Bench.SM_Bench", "size": "Small" }
//!   ]
//! }
//! ```
//!
//! # Ownership
//!
//! This crate owns only the `definitions` array. Every other top-level field
//! is carried through a parse→mutate→serialize cycle untouched, in its
//! original order (serde_json is built with `preserve_order`).
//!
//! # Example
//!
//! ```
//! use prop_registry::core::registry::schema::RegistryDocument;
//! use prop_registry::core::types::PropSize;
//!
//! let doc = RegistryDocument::parse(r#"{
//!     "version": 3,
//!     "definitions": [ { "name": "bench", "path": "/Game/Bench", "size": "Small" } ]
//! }"#).unwrap();
//!
//! let records = doc.records().unwrap();
//! assert_eq!(records[0].name, "bench");
//! assert_eq!(records[0].size, PropSize::Small);
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::types::{PropRecord, PropSize};

/// Top-level field holding the record array.
pub const DEFINITIONS: &str = "definitions";

/// Record field holding the key.
pub const FIELD_NAME: &str = "name";

/// Record field holding the mesh asset path.
pub const FIELD_PATH: &str = "path";

/// Record field holding the size class.
pub const FIELD_SIZE: &str = "size";

/// File-name suffix of every registry document.
pub const REGISTRY_SUFFIX: &str = ".PropRegistry.json";

/// Token identifying the base document by file name.
pub const DEFAULT_MARKER: &str = "Default";

/// Errors from document parsing.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse registry JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("registry document root must be a JSON object")]
    NotAnObject,

    #[error("registry document has no '{}' array", DEFINITIONS)]
    MissingDefinitions,
}

/// A parsed registry document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryDocument {
    root: Map<String, Value>,
}

impl RegistryDocument {
    /// A document with no fields at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a document. The root must be a JSON object.
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(SchemaError::NotAnObject),
        }
    }

    /// Serialize as pretty JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(&self.root)?;
        text.push('\n');
        Ok(text)
    }

    /// The `definitions` array, if present and an array.
    pub fn definitions(&self) -> Option<&Vec<Value>> {
        self.root.get(DEFINITIONS).and_then(Value::as_array)
    }

    /// Remove and return the `definitions` array.
    ///
    /// Returns an empty vector if the field is missing or not an array.
    /// The field keeps its slot in the key order until
    /// [`set_definitions`](Self::set_definitions) writes it back.
    pub fn take_definitions(&mut self) -> Vec<Value> {
        match self.root.get_mut(DEFINITIONS) {
            Some(Value::Array(items)) => std::mem::take(items),
            _ => Vec::new(),
        }
    }

    /// Store the `definitions` array, replacing whatever was there.
    pub fn set_definitions(&mut self, items: Vec<Value>) {
        self.root.insert(DEFINITIONS.to_string(), Value::Array(items));
    }

    /// Parse the `definitions` array into records.
    ///
    /// Entries that do not carry a string `name` and `path` are skipped.
    pub fn records(&self) -> Result<Vec<PropRecord>, SchemaError> {
        let items = self.definitions().ok_or(SchemaError::MissingDefinitions)?;
        Ok(items.iter().filter_map(record_from_value).collect())
    }
}

/// The key of a JSON record, if it has one.
pub fn record_name(value: &Value) -> Option<&str> {
    value.get(FIELD_NAME).and_then(Value::as_str)
}

/// Build a record from a JSON value.
///
/// Requires an object with string `name` and `path`. A missing or
/// non-string `size` maps to [`PropSize::Invalid`].
pub fn record_from_value(value: &Value) -> Option<PropRecord> {
    let obj = value.as_object()?;
    let name = obj.get(FIELD_NAME)?.as_str()?;
    let path = obj.get(FIELD_PATH)?.as_str()?;
    let size = obj
        .get(FIELD_SIZE)
        .and_then(Value::as_str)
        .map(PropSize::parse_lenient)
        .unwrap_or(PropSize::Invalid);

    Some(PropRecord::new(name, path, size))
}

/// Write a record's fields into a JSON object.
///
/// When `existing` is the object already stored for this record, fields
/// other than `name`, `path` and `size` are kept.
pub fn record_to_object(record: &PropRecord, existing: Option<&Value>) -> Value {
    let mut obj = existing
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    obj.insert(FIELD_NAME.to_string(), Value::String(record.name.clone()));
    obj.insert(
        FIELD_PATH.to_string(),
        Value::String(record.mesh_path.clone()),
    );
    obj.insert(
        FIELD_SIZE.to_string(),
        Value::String(record.size.as_str().to_string()),
    );

    Value::Object(obj)
}
