//! Element tags carried by every grid identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// The four elemental categories a recipe grid can belong to.
///
/// On the wire a tag appears two ways: as its single-letter code at the end
/// of a grid identifier (`R`, `B`, `G`, `Y`) and as its display name in a
/// reward's `property` field (`火系`, `水系`, `草系`, `雷系`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementTag {
    #[serde(rename = "火系", alias = "Fire")]
    Fire,
    #[serde(rename = "水系", alias = "Water")]
    Water,
    #[serde(rename = "草系", alias = "Grass")]
    Grass,
    #[serde(rename = "雷系", alias = "Thunder")]
    Thunder,
}

impl ElementTag {
    pub const ALL: [ElementTag; 4] = [
        ElementTag::Fire,
        ElementTag::Water,
        ElementTag::Grass,
        ElementTag::Thunder,
    ];

    /// Single-letter code used after the `:` in a grid identifier.
    pub fn code(self) -> char {
        match self {
            ElementTag::Fire => 'R',
            ElementTag::Water => 'B',
            ElementTag::Grass => 'G',
            ElementTag::Thunder => 'Y',
        }
    }

    /// Resolve a code letter. Codes are case-sensitive.
    pub fn from_code(code: char) -> Option<ElementTag> {
        match code {
            'R' => Some(ElementTag::Fire),
            'B' => Some(ElementTag::Water),
            'G' => Some(ElementTag::Grass),
            'Y' => Some(ElementTag::Thunder),
            _ => None,
        }
    }

    /// Name written to recipe documents and shown to designers.
    pub fn display_name(self) -> &'static str {
        match self {
            ElementTag::Fire => "火系",
            ElementTag::Water => "水系",
            ElementTag::Grass => "草系",
            ElementTag::Thunder => "雷系",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            ElementTag::Fire => "Fire",
            ElementTag::Water => "Water",
            ElementTag::Grass => "Grass",
            ElementTag::Thunder => "Thunder",
        }
    }

    /// Resolve a display name exactly as it appears in recipe documents.
    pub fn from_display_name(name: &str) -> Option<ElementTag> {
        ElementTag::ALL
            .into_iter()
            .find(|tag| tag.display_name() == name)
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lenient parse for user input: display name, English name in any case,
/// or the code letter.
impl FromStr for ElementTag {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(tag) = ElementTag::from_display_name(s) {
            return Ok(tag);
        }
        if let Some(tag) = ElementTag::ALL
            .into_iter()
            .find(|tag| tag.english_name().eq_ignore_ascii_case(s))
        {
            return Ok(tag);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                ElementTag::from_code(c).ok_or_else(|| GridError::InvalidTag(s.to_string()))
            }
            _ => Err(GridError::InvalidTag(s.to_string())),
        }
    }
}
