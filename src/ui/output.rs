//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON.

use std::fmt::Display;

use serde::Serialize;

use crate::core::registry::LoadedProp;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a value as pretty JSON (always shown).
pub fn json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format one folded prop as a table row.
///
/// The last column is the file name of the layer that supplied the record.
pub fn format_prop(prop: &LoadedProp, name_width: usize) -> String {
    let mesh = if prop.mesh.is_some() { "ok" } else { "missing" };
    let source = prop
        .source
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| prop.source.to_string_lossy());
    format!(
        "{:<width$}  {:<7}  {:<7}  {}  [{}]",
        prop.name(),
        prop.record.size.as_str(),
        mesh,
        prop.record.mesh_path,
        source,
        width = name_width
    )
}

/// Format folded props as an aligned table.
pub fn format_props(props: &[LoadedProp]) -> String {
    let width = props
        .iter()
        .map(|p| p.name().len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut lines = vec![format!(
        "{:<width$}  {:<7}  {:<7}  {}",
        "NAME",
        "SIZE",
        "MESH",
        "PATH",
        width = width
    )];
    lines.extend(props.iter().map(|p| format_prop(p, width)));
    lines.join("\n")
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
