//! Recipe record to JSON text.

use serde_json::Value;

use crate::deserialize::REQUIRED_FIELDS;
use crate::error::RecipeError;
use crate::types::RecipeRecord;

/// Encode a recipe as pretty-printed JSON.
///
/// Fields come out in the order id, name, tags, materials, base_elements,
/// rewards, lists keep their order, and non-ASCII text is written as-is.
/// The record's value tree is shape-checked with [`check_encodable`] first.
/// A typed [`RecipeRecord`] always passes that check, so in practice this
/// only fails with [`RecipeError::Serialization`].
/// Grid identifiers are not decoded here; [`crate::decode_recipe`] is the
/// authority on them.
pub fn encode_recipe(record: &RecipeRecord) -> Result<String, RecipeError> {
    let tree =
        serde_json::to_value(record).map_err(|e| RecipeError::Serialization(e.to_string()))?;
    check_encodable(&tree)?;
    let text = serde_json::to_string_pretty(record)
        .map_err(|e| RecipeError::Serialization(e.to_string()))?;
    tracing::debug!(recipe_id = record.id, bytes = text.len(), "encoded recipe");
    Ok(text)
}

/// Check that a recipe value tree carries every field needed to encode it.
///
/// Only presence and list shape are checked, in document order:
/// top-level fields, `materials` entries (`type` or `kind`, and `id`),
/// `base_elements` entries (`id`), `rewards` entries (`level`, `property`,
/// `id`).
pub fn check_encodable(tree: &Value) -> Result<(), RecipeError> {
    for field in REQUIRED_FIELDS {
        if tree.get(field).is_none() {
            return Err(RecipeError::MissingField(field.to_string()));
        }
    }

    let materials = list_field(tree, "materials")?;
    for (i, material) in materials.iter().enumerate() {
        let has_kind = material.get("type").is_some() || material.get("kind").is_some();
        if !has_kind || material.get("id").is_none() {
            return Err(RecipeError::MaterialMissingField(i));
        }
    }

    let base_elements = list_field(tree, "base_elements")?;
    for (i, element) in base_elements.iter().enumerate() {
        if element.get("id").is_none() {
            return Err(RecipeError::BaseElementMissingField(i));
        }
    }

    let rewards = list_field(tree, "rewards")?;
    for (i, reward) in rewards.iter().enumerate() {
        if ["level", "property", "id"]
            .iter()
            .any(|key| reward.get(*key).is_none())
        {
            return Err(RecipeError::RewardMissingField(i));
        }
    }

    Ok(())
}

pub(crate) fn list_field<'a>(tree: &'a Value, field: &str) -> Result<&'a Vec<Value>, RecipeError> {
    tree.get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| RecipeError::NotAList(field.to_string()))
}
