//! core::definitions
//!
//! Turning folded props into actor definitions.
//!
//! # Definition Shape
//!
//! For a prop named `Bench01` of size `Small`, [`PropDefinitionBuilder`]
//! produces:
//!
//! - id `static.prop.bench01`
//! - tags `static`, `prop`, `bench01`
//! - attribute `size = "small"`
//! - variation `role_name`, recommended `["prop"]`
//!
//! # Example
//!
//! ```
//! use prop_registry::core::definitions::{DefinitionBuilder, PropDefinitionBuilder};
//! use prop_registry::core::registry::loader::LoadedProp;
//! use prop_registry::core::types::{PropRecord, PropSize};
//! use std::path::PathBuf;
//!
//! let prop = LoadedProp {
//!     record: PropRecord::new("Bench01", "/Game/Bench", PropSize::Small),
//!     mesh: None,
//!     source: PathBuf::from("Default.PropRegistry.json"),
//! };
//! let defs = PropDefinitionBuilder.build(&[prop]);
//! assert_eq!(defs[0].id, "static.prop.bench01");
//! ```

use serde::Serialize;
use tracing::warn;

use crate::core::assets::MeshHandle;
use crate::core::keyed::KeyedList;
use crate::core::registry::loader::LoadedProp;
use crate::core::types::PropSize;

/// A fixed attribute of an actor definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorAttribute {
    pub id: String,
    pub value: String,
}

/// A user-settable attribute with suggested values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorVariation {
    pub id: String,
    pub recommended_values: Vec<String>,
    pub restrict_to_recommended: bool,
}

/// Definition consumed by the actor spawning side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorDefinition {
    pub id: String,
    pub tags: Vec<String>,
    pub attributes: Vec<ActorAttribute>,
    pub variations: Vec<ActorVariation>,
    pub mesh: Option<MeshHandle>,
}

impl ActorDefinition {
    pub fn attribute(&self, id: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.value.as_str())
    }
}

/// Builds actor definitions from the folded prop list.
pub trait DefinitionBuilder {
    fn build(&self, props: &[LoadedProp]) -> Vec<ActorDefinition>;
}

/// The stock builder for `static.prop.*` definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropDefinitionBuilder;

impl PropDefinitionBuilder {
    /// Build one definition, or `None` if the resulting id is not valid.
    pub fn build_one(&self, prop: &LoadedProp) -> Option<ActorDefinition> {
        let name = prop.name().to_lowercase();
        let tags = vec!["static".to_string(), "prop".to_string(), name];
        let id = tags.join(".");

        if !is_valid_id(&id) {
            warn!(name = %prop.name(), %id, "rejecting prop definition with invalid id");
            return None;
        }

        Some(ActorDefinition {
            id,
            tags,
            attributes: vec![ActorAttribute {
                id: "size".to_string(),
                value: size_attribute(prop.record.size).to_string(),
            }],
            variations: vec![ActorVariation {
                id: "role_name".to_string(),
                recommended_values: vec!["prop".to_string()],
                restrict_to_recommended: false,
            }],
            mesh: prop.mesh.clone(),
        })
    }
}

impl DefinitionBuilder for PropDefinitionBuilder {
    /// Ids are unique in the result. Names that differ only in case share an
    /// id; the later prop replaces the earlier one in place.
    fn build(&self, props: &[LoadedProp]) -> Vec<ActorDefinition> {
        let mut built: KeyedList<ActorDefinition> = KeyedList::with_capacity(props.len());
        for prop in props {
            let Some(def) = self.build_one(prop) else {
                continue;
            };
            let id = def.id.clone();
            if !built.upsert(id.clone(), def).is_insert() {
                warn!(name = %prop.name(), %id, "prop definition id collides, later prop wins");
            }
        }
        built.into_vec()
    }
}

fn size_attribute(size: PropSize) -> &'static str {
    match size {
        PropSize::Tiny => "tiny",
        PropSize::Small => "small",
        PropSize::Medium => "medium",
        PropSize::Big => "big",
        PropSize::Huge => "huge",
        PropSize::Invalid => "unknown",
    }
}

/// Ids are dot-separated, non-empty segments of `[a-z0-9_-]`.
fn is_valid_id(id: &str) -> bool {
    id.split('.').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    })
}
