//! Errors raised while encoding, decoding or building recipes.

use serde_json::json;
use ualchemia_core::GridError;

/// A rejected recipe document or record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    /// The text is not JSON.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// One of the six top-level fields is absent.
    #[error("recipe is missing required field: '{0}'")]
    MissingField(String),

    /// A list field holds something other than a list.
    #[error("field '{0}' must be a list")]
    NotAList(String),

    /// A present field has the wrong JSON type.
    #[error("field '{field}' must be {expected}")]
    InvalidField { field: String, expected: String },

    /// A material lacks `type` or `id`.
    #[error("materials[{0}] must contain 'type' and 'id'")]
    MaterialMissingField(usize),

    /// A material `type` is neither `class` nor `material`.
    #[error("materials[{index}] has unknown type '{value}'")]
    MaterialInvalidKind { index: usize, value: String },

    /// A base element lacks `id`.
    #[error("base_elements[{0}] must contain 'id'")]
    BaseElementMissingField(usize),

    /// A base element `id` is not a valid grid identifier.
    #[error("base_elements[{index}] has an invalid grid identifier: {source}")]
    BaseElementGridInvalid {
        index: usize,
        #[source]
        source: GridError,
    },

    /// A reward lacks `level`, `property` or `id`.
    #[error("rewards[{0}] must contain 'level', 'property' and 'id'")]
    RewardMissingField(usize),

    /// A reward `property` is not an element display name.
    #[error("rewards[{index}] has unknown property '{value}'")]
    RewardInvalidProperty { index: usize, value: String },

    /// A reward `id` is not a valid grid identifier.
    #[error("rewards[{index}] has an invalid grid identifier: {source}")]
    RewardGridInvalid {
        index: usize,
        #[source]
        source: GridError,
    },

    /// serde_json failed while writing the document.
    #[error("failed to serialize recipe: {0}")]
    Serialization(String),
}

impl RecipeError {
    /// Stable name of the failure, used in JSON reports and fixtures.
    pub fn kind(&self) -> &'static str {
        match self {
            RecipeError::MalformedJson(_) => "MalformedJSON",
            RecipeError::MissingField(_) => "MissingField",
            RecipeError::NotAList(_) => "NotAList",
            RecipeError::InvalidField { .. } => "InvalidField",
            RecipeError::MaterialMissingField(_) => "MaterialMissingField",
            RecipeError::MaterialInvalidKind { .. } => "MaterialInvalidKind",
            RecipeError::BaseElementMissingField(_) => "BaseElementMissingField",
            RecipeError::BaseElementGridInvalid { .. } => "BaseElementGridInvalid",
            RecipeError::RewardMissingField(_) => "RewardMissingField",
            RecipeError::RewardInvalidProperty { .. } => "RewardInvalidProperty",
            RecipeError::RewardGridInvalid { .. } => "RewardGridInvalid",
            RecipeError::Serialization(_) => "Serialization",
        }
    }

    /// Structured form of the error.
    ///
    /// Always has `error` (the kind) and `message`; detail keys depend on the
    /// variant. Wrapped grid failures nest under `grid`. The parser message of
    /// `MalformedJSON` is left out of the detail keys because it varies across
    /// serde_json releases.
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut value = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        let details: Vec<(&str, serde_json::Value)> = match self {
            RecipeError::MalformedJson(_) | RecipeError::Serialization(_) => vec![],
            RecipeError::MissingField(field) | RecipeError::NotAList(field) => {
                vec![("field", json!(field))]
            }
            RecipeError::InvalidField { field, expected } => {
                vec![("field", json!(field)), ("expected", json!(expected))]
            }
            RecipeError::MaterialMissingField(index)
            | RecipeError::BaseElementMissingField(index)
            | RecipeError::RewardMissingField(index) => vec![("index", json!(index))],
            RecipeError::MaterialInvalidKind { index, value }
            | RecipeError::RewardInvalidProperty { index, value } => {
                vec![("index", json!(index)), ("value", json!(value))]
            }
            RecipeError::BaseElementGridInvalid { index, source }
            | RecipeError::RewardGridInvalid { index, source } => {
                vec![("index", json!(index)), ("grid", source.to_json_value())]
            }
        };
        if let Some(obj) = value.as_object_mut() {
            for (key, v) in details {
                obj.insert(key.to_string(), v);
            }
        }
        value
    }

    /// The wrapped grid failure, if this error came from the grid codec.
    pub fn grid_error(&self) -> Option<&GridError> {
        match self {
            RecipeError::BaseElementGridInvalid { source, .. }
            | RecipeError::RewardGridInvalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A form field the designer filled in wrongly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("recipe id must be an integer, got '{0}'")]
    InvalidId(String),

    #[error("material id must not be empty")]
    EmptyMaterialId,

    #[error("an element must be chosen for the grid")]
    MissingElement,

    #[error("a reward property must be chosen")]
    MissingProperty,

    #[error("reward level must be an integer, got '{0}'")]
    InvalidLevel(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
