//! ualchemia-interchange: recipe JSON types, encoding and decoding.
//!
//! A recipe document is the JSON form of one [`RecipeRecord`]:
//!
//! ```json
//! {
//!   "id": 1001,
//!   "name": "火焰药剂",
//!   "tags": ["药剂"],
//!   "materials": [{"type": "class", "id": "herb"}],
//!   "base_elements": [{"id": "100020001:R"}],
//!   "rewards": [{"level": 2, "property": "水系", "id": "010111010:B"}]
//! }
//! ```
//!
//! [`encode_recipe`] checks field presence and writes the document;
//! [`decode_recipe`] parses it and validates every field, including the
//! embedded grid identifiers. [`RecipeForm`] is the editing model a front
//! end fills in before encoding.

pub mod deserialize;
pub mod error;
pub mod form;
pub mod serialize;
pub mod types;

pub use deserialize::{decode_recipe, decode_recipe_value, REQUIRED_FIELDS};
pub use error::{FormError, RecipeError};
pub use form::{split_tags, RecipeForm};
pub use serialize::{check_encodable, encode_recipe};
pub use types::*;
