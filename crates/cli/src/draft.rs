//! TOML recipe drafts.
//!
//! A draft is the file-based stand-in for the recipe form: the designer
//! writes field values by hand and `ualchemia encode` feeds them through
//! [`RecipeForm`], so a draft is checked exactly like form input.
//!
//! ```toml
//! id = 1001
//! name = "火焰药剂"
//! tags = "药剂, 火"
//!
//! [[materials]]
//! type = "class"
//! id = "herb"
//!
//! [[base_elements]]
//! grid = ["100", "020", "001"]
//! element = "火系"
//!
//! [[rewards]]
//! level = 2
//! property = "水系"
//! clicks = [0, 4, 4, 8]
//! element = "B"
//! ```

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use ualchemia_core::{ElementTag, Grid};
use ualchemia_interchange::{MaterialKind, RecipeForm};

use crate::config::DraftSettings;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Draft {
    pub id: Scalar,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub materials: Vec<DraftMaterial>,
    #[serde(default)]
    pub base_elements: Vec<DraftGrid>,
    #[serde(default)]
    pub rewards: Vec<DraftReward>,
}

/// A value the form reads as text: drafts may write it as a number or a
/// string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Tags as one comma separated line or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    Line(String),
    List(Vec<String>),
}

impl Default for Tags {
    fn default() -> Self {
        Tags::Line(String::new())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftMaterial {
    #[serde(rename = "type", alias = "kind")]
    pub kind: Option<MaterialKind>,
    pub id: String,
}

/// Cells written as rows (`["100", "020", "001"]`) or one string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GridRows {
    Rows(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftGrid {
    pub grid: Option<GridRows>,
    /// Cell indices clicked on an empty grid, in order.
    pub clicks: Option<Vec<usize>>,
    pub element: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftReward {
    pub level: Scalar,
    pub property: Option<String>,
    pub grid: Option<GridRows>,
    pub clicks: Option<Vec<usize>>,
    pub element: Option<String>,
}

/// Read a draft file and replay it into a form.
pub fn load_draft(path: &Path, settings: &DraftSettings) -> Result<RecipeForm, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    let draft: Draft = toml::from_str(&content)
        .map_err(|e| format!("could not parse '{}': {}", path.display(), e))?;
    draft.into_form(settings)
}

impl Draft {
    /// Feed every field through the form's checked operations.
    ///
    /// Errors name the offending entry, e.g. `rewards[1]: ...`.
    pub fn into_form(self, settings: &DraftSettings) -> Result<RecipeForm, String> {
        let mut form = RecipeForm::new();
        form.id = self.id.to_string();
        form.name = self.name;
        match self.tags {
            Tags::Line(line) => form.tags = line,
            Tags::List(list) => form.set_tag_list(list),
        }

        for (i, material) in self.materials.into_iter().enumerate() {
            let kind = material.kind.unwrap_or(settings.default_material_type);
            form.add_material(kind, &material.id)
                .map_err(|e| format!("materials[{}]: {}", i, e))?;
        }

        for (i, entry) in self.base_elements.into_iter().enumerate() {
            let context = |e: String| format!("base_elements[{}]: {}", i, e);
            let grid = resolve_grid(entry.grid, entry.clicks).map_err(context)?;
            let element = parse_tag(entry.element.as_deref()).map_err(context)?;
            form.add_base_element(&grid, element)
                .map_err(|e| context(e.to_string()))?;
        }

        for (i, entry) in self.rewards.into_iter().enumerate() {
            let context = |e: String| format!("rewards[{}]: {}", i, e);
            let grid = resolve_grid(entry.grid, entry.clicks).map_err(context)?;
            let property = parse_tag(entry.property.as_deref()).map_err(context)?;
            let element = parse_tag(entry.element.as_deref()).map_err(context)?;
            form.add_reward(&entry.level.to_string(), property, &grid, element)
                .map_err(|e| context(e.to_string()))?;
        }

        tracing::debug!(
            materials = form.materials().len(),
            base_elements = form.base_elements().len(),
            rewards = form.rewards().len(),
            "loaded draft"
        );
        Ok(form)
    }
}

fn resolve_grid(rows: Option<GridRows>, clicks: Option<Vec<usize>>) -> Result<Grid, String> {
    match (rows, clicks) {
        (Some(rows), None) => {
            let text = match rows {
                GridRows::Rows(rows) => rows.join("/"),
                GridRows::Text(text) => text,
            };
            Grid::parse_cells(&text).map_err(|e| e.to_string())
        }
        (None, Some(clicks)) => Grid::from_clicks(&clicks).map_err(|e| e.to_string()),
        (Some(_), Some(_)) => Err("give either 'grid' or 'clicks', not both".to_string()),
        (None, None) => Err("missing 'grid' or 'clicks'".to_string()),
    }
}

fn parse_tag(text: Option<&str>) -> Result<Option<ElementTag>, String> {
    text.map(|t| t.parse::<ElementTag>().map_err(|e| e.to_string()))
        .transpose()
}
