use serde_json::json;

/// A rejected grid or grid identifier.
///
/// Every variant is a deterministic verdict on one malformed input; none of
/// them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The cell sequence is not nine cells of 0, 1 or 2.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// All nine cells are empty.
    #[error("grid must contain at least one non-empty cell")]
    EmptyGrid,

    /// The element tag is absent or not one of the recognized tags.
    #[error("invalid element tag: '{0}'")]
    InvalidTag(String),

    /// The identifier has no `:` separating cells from the element code.
    #[error("grid identifier is missing its element tag")]
    MissingTag,

    /// The cell part of the identifier is not nine characters long.
    #[error("invalid grid identifier length: expected 9 cells, got {0}")]
    InvalidLength(usize),

    /// A cell character is not `0`, `1` or `2`.
    #[error("invalid grid character: '{0}'")]
    InvalidCharacter(char),

    /// A reducer step addressed a cell outside the 3x3 grid.
    #[error("cell index {index} is outside the 3x3 grid")]
    CellOutOfRange { index: usize },
}

impl GridError {
    /// Stable name of the failure, used in JSON reports and fixtures.
    pub fn kind(&self) -> &'static str {
        match self {
            GridError::InvalidGrid(_) => "InvalidGrid",
            GridError::EmptyGrid => "EmptyGrid",
            GridError::InvalidTag(_) => "InvalidTag",
            GridError::MissingTag => "MissingTag",
            GridError::InvalidLength(_) => "InvalidLength",
            GridError::InvalidCharacter(_) => "InvalidCharacter",
            GridError::CellOutOfRange { .. } => "CellOutOfRange",
        }
    }

    /// Structured form: `{"error": kind, "message": text}` plus the detail
    /// field of the variant, if it has one.
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut value = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        let detail = match self {
            GridError::InvalidGrid(detail) => Some(("detail", json!(detail))),
            GridError::InvalidTag(tag) => Some(("tag", json!(tag))),
            GridError::InvalidLength(len) => Some(("length", json!(len))),
            GridError::InvalidCharacter(c) => Some(("character", json!(c.to_string()))),
            GridError::CellOutOfRange { index } => Some(("index", json!(index))),
            GridError::EmptyGrid | GridError::MissingTag => None,
        };
        if let (Some((key, v)), Some(obj)) = (detail, value.as_object_mut()) {
            obj.insert(key.to_string(), v);
        }
        value
    }
}
