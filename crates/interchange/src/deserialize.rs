//! Validated decoding of recipe JSON into [`RecipeRecord`].
//!
//! Decoding walks the parsed `serde_json::Value` field by field so that each
//! kind of malformed input maps to its own [`RecipeError`] variant, instead
//! of surfacing as a generic serde message.

use serde_json::Value;
use ualchemia_core::{ElementTag, GridError};

use crate::error::RecipeError;
use crate::serialize::list_field;
use crate::types::*;

/// Top-level fields every recipe document must carry, in document order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "id",
    "name",
    "tags",
    "materials",
    "base_elements",
    "rewards",
];

/// Parse and validate a recipe document.
pub fn decode_recipe(json_text: &str) -> Result<RecipeRecord, RecipeError> {
    let tree: Value =
        serde_json::from_str(json_text).map_err(|e| RecipeError::MalformedJson(e.to_string()))?;
    decode_recipe_value(&tree)
}

/// Validate an already parsed recipe document.
///
/// Checks run in document order and stop at the first failure: presence of
/// all top-level fields, then `id`, `name`, `tags`, then each material, base
/// element and reward. Every grid identifier is decoded; a failure is
/// reported with the index of the entry that holds it.
pub fn decode_recipe_value(tree: &Value) -> Result<RecipeRecord, RecipeError> {
    for field in REQUIRED_FIELDS {
        if tree.get(field).is_none() {
            return Err(RecipeError::MissingField(field.to_string()));
        }
    }

    let id = tree
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| invalid("id", "an integer"))?;
    let name = tree
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("name", "a string"))?
        .to_string();
    let tags = parse_tags(tree)?;

    let materials = list_field(tree, "materials")?
        .iter()
        .enumerate()
        .map(|(i, obj)| parse_material(i, obj))
        .collect::<Result<Vec<_>, _>>()?;

    let base_elements = list_field(tree, "base_elements")?
        .iter()
        .enumerate()
        .map(|(i, obj)| parse_base_element(i, obj))
        .collect::<Result<Vec<_>, _>>()?;

    let rewards = list_field(tree, "rewards")?
        .iter()
        .enumerate()
        .map(|(i, obj)| parse_reward(i, obj))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        recipe_id = id,
        materials = materials.len(),
        base_elements = base_elements.len(),
        rewards = rewards.len(),
        "decoded recipe"
    );

    Ok(RecipeRecord {
        id,
        name,
        tags,
        materials,
        base_elements,
        rewards,
    })
}

// ── Parsing helpers ─────────────────────────────────────────────────

fn invalid(field: impl Into<String>, expected: &str) -> RecipeError {
    RecipeError::InvalidField {
        field: field.into(),
        expected: expected.to_string(),
    }
}

fn parse_tags(tree: &Value) -> Result<Vec<String>, RecipeError> {
    let tags = list_field(tree, "tags")?;
    tags.iter()
        .enumerate()
        .map(|(i, tag)| {
            tag.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(format!("tags[{}]", i), "a string"))
        })
        .collect()
}

fn parse_material(index: usize, obj: &Value) -> Result<Material, RecipeError> {
    let kind = obj.get("type").or_else(|| obj.get("kind"));
    let (kind, id) = match (kind, obj.get("id")) {
        (Some(kind), Some(id)) => (kind, id),
        _ => return Err(RecipeError::MaterialMissingField(index)),
    };

    let kind_str = kind
        .as_str()
        .ok_or_else(|| invalid(format!("materials[{}].type", index), "a string"))?;
    let kind = MaterialKind::parse(kind_str).ok_or_else(|| RecipeError::MaterialInvalidKind {
        index,
        value: kind_str.to_string(),
    })?;
    let id = id
        .as_str()
        .ok_or_else(|| invalid(format!("materials[{}].id", index), "a string"))?
        .to_string();

    Ok(Material { kind, id })
}

fn parse_base_element(index: usize, obj: &Value) -> Result<BaseElement, RecipeError> {
    let id = obj
        .get("id")
        .ok_or(RecipeError::BaseElementMissingField(index))?;
    let id = id
        .as_str()
        .ok_or_else(|| invalid(format!("base_elements[{}].id", index), "a string"))?;

    check_grid(id).map_err(|source| RecipeError::BaseElementGridInvalid { index, source })?;

    Ok(BaseElement { id: id.to_string() })
}

fn parse_reward(index: usize, obj: &Value) -> Result<Reward, RecipeError> {
    let (level, property, id) = match (obj.get("level"), obj.get("property"), obj.get("id")) {
        (Some(level), Some(property), Some(id)) => (level, property, id),
        _ => return Err(RecipeError::RewardMissingField(index)),
    };

    let id = id
        .as_str()
        .ok_or_else(|| invalid(format!("rewards[{}].id", index), "a string"))?;
    check_grid(id).map_err(|source| RecipeError::RewardGridInvalid { index, source })?;

    let level = level
        .as_i64()
        .ok_or_else(|| invalid(format!("rewards[{}].level", index), "an integer"))?;
    let property_str = property
        .as_str()
        .ok_or_else(|| invalid(format!("rewards[{}].property", index), "a string"))?;
    let unlock_property = ElementTag::from_display_name(property_str).ok_or_else(|| {
        RecipeError::RewardInvalidProperty {
            index,
            value: property_str.to_string(),
        }
    })?;

    Ok(Reward {
        level,
        unlock_property,
        id: id.to_string(),
    })
}

/// Decode a grid identifier and insist it resolved to an element.
///
/// A successful decode always carries a tag; the explicit check keeps the
/// rule visible should the codec ever allow untagged grids.
fn check_grid(id: &str) -> Result<(), GridError> {
    let (_, tag) = ualchemia_core::decode(id)?;
    if !ElementTag::ALL.contains(&tag) {
        return Err(GridError::InvalidTag(tag.code().to_string()));
    }
    Ok(())
}
