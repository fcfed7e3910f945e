//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! Command results go to stdout through this module so quiet and JSON
//! modes are handled in one place. Diagnostics go through `tracing`.

pub mod output;
