//! Typed structs for the recipe JSON document.
//!
//! Field order of [`RecipeRecord`] is the field order of the encoded
//! document. Grid identifiers are kept as the strings found in the document;
//! [`crate::decode_recipe`] is the step that checks them.

use serde::{Deserialize, Serialize};
use ualchemia_core::{ElementTag, Grid, GridError};

/// One alchemy recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: i64,
    pub name: String,
    /// In insertion order; duplicates allowed.
    pub tags: Vec<String>,
    pub materials: Vec<Material>,
    pub base_elements: Vec<BaseElement>,
    pub rewards: Vec<Reward>,
}

/// Whether a material slot accepts a whole class of items or one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Class,
    Material,
}

impl MaterialKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialKind::Class => "class",
            MaterialKind::Material => "material",
        }
    }

    pub fn parse(s: &str) -> Option<MaterialKind> {
        match s {
            "class" => Some(MaterialKind::Class),
            "material" => Some(MaterialKind::Material),
            _ => None,
        }
    }
}

/// A material reference. Serialized with the key `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    #[serde(rename = "type", alias = "kind")]
    pub kind: MaterialKind,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseElement {
    /// Grid identifier, e.g. `100020001:R`.
    pub id: String,
}

impl BaseElement {
    pub fn grid(&self) -> Result<(Grid, ElementTag), GridError> {
        ualchemia_core::decode(&self.id)
    }
}

/// A reward unlocked at `level` by the `property` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub level: i64,
    #[serde(rename = "property")]
    pub unlock_property: ElementTag,
    /// Grid identifier, e.g. `100020001:R`.
    pub id: String,
}

impl Reward {
    pub fn grid(&self) -> Result<(Grid, ElementTag), GridError> {
        ualchemia_core::decode(&self.id)
    }
}
