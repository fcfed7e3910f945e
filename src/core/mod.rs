//! core
//!
//! Core domain types, registry storage, and resolution.
//!
//! # Modules
//!
//! - [`types`] - Prop records and the size class table
//! - [`keyed`] - Ordered upsert-by-key collection
//! - [`registry`] - Registry documents: schema, writer, discovery, loader
//! - [`assets`] - Mesh asset resolution
//! - [`definitions`] - Actor definitions built from folded props
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Registry and content roots
//!
//! # Design Principles
//!
//! - Roots are always passed in, never derived from global state
//! - Read-side anomalies are absorbed and logged; only writes fail
//! - Merge order is deterministic

pub mod assets;
pub mod config;
pub mod definitions;
pub mod keyed;
pub mod paths;
pub mod registry;
pub mod types;
