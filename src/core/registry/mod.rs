//! core::registry
//!
//! Layered prop registry documents.
//!
//! # Modules
//!
//! - [`schema`] - Document format and record (de)serialization
//! - [`writer`] - Merge records into the base document
//! - [`discovery`] - Find documents and fix their processing order
//! - [`loader`] - Fold all documents into one prop list
//!
//! # Layers
//!
//! One document is the base layer (its file name contains `Default`). It is
//! always folded first and is the only document the writer touches. Every
//! other `*.PropRegistry.json` under the registry root can add entries or
//! override entries of the base by name.

pub mod discovery;
pub mod loader;
pub mod schema;
pub mod writer;

pub use discovery::{find_registry_files, order_for_processing};
pub use loader::{LoadOutcome, LoadedProp, RegistryLoader, SkipReason, SkippedFile};
pub use schema::{RegistryDocument, SchemaError, DEFAULT_MARKER, DEFINITIONS, REGISTRY_SUFFIX};
pub use writer::{MergeReport, RegistryWriter, WriteError};
