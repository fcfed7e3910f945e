//! prop-registry - Layered registry of prop definitions
//!
//! Prop definitions (a name, a mesh asset path, and a size class) live in
//! `*.PropRegistry.json` documents. One document is the base layer; every
//! other document may add props or override base props by name.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, registry documents, writer, loader, assets
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`ui`] - Output formatting
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Guarantees
//!
//! 1. Names are unique in every written document and every loaded collection
//! 2. The base document is always folded first, so other layers override it
//! 3. Writes replace records in place and leave unrelated content untouched
//! 4. Only a failed write is an error; read-side anomalies are logged
//!
//! # Example
//!
//! ```no_run
//! use prop_registry::core::assets::ContentResolver;
//! use prop_registry::core::paths::RegistryPaths;
//! use prop_registry::core::registry::RegistryLoader;
//!
//! let paths = RegistryPaths::new("Config", "Content");
//! let resolver = ContentResolver::new(paths.content_root());
//! let outcome = RegistryLoader::new(paths, &resolver).load_all();
//! for prop in &outcome.props {
//!     println!("{} ({})", prop.name(), prop.record.size);
//! }
//! ```

pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
