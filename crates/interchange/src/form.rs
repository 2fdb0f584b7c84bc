//! Editable recipe form.
//!
//! [`RecipeForm`] holds what a designer has typed so far: raw text for the
//! scalar fields and already-validated list entries. Entries are added
//! through checked methods and removed by index; [`RecipeForm::build`] turns
//! the form into a [`RecipeRecord`] ready for [`crate::encode_recipe`].

use ualchemia_core::{ElementTag, Grid};

use crate::error::FormError;
use crate::types::*;

/// Separators accepted between tags: ASCII and full-width commas.
const TAG_SEPARATORS: [char; 2] = [',', '，'];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    /// Recipe id as typed; must parse as an integer on build.
    pub id: String,
    pub name: String,
    /// Comma separated tags as typed.
    pub tags: String,
    /// Tags given one by one; when set, `tags` is not split.
    tag_list: Option<Vec<String>>,
    materials: Vec<Material>,
    base_elements: Vec<BaseElement>,
    rewards: Vec<Reward>,
}

impl RecipeForm {
    pub fn new() -> Self {
        RecipeForm::default()
    }

    /// Use `tags` verbatim instead of splitting the `tags` line, so a tag
    /// may itself contain a comma.
    pub fn set_tag_list(&mut self, tags: Vec<String>) {
        self.tags.clear();
        self.tag_list = Some(tags);
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn base_elements(&self) -> &[BaseElement] {
        &self.base_elements
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Append a material; returns its index.
    pub fn add_material(&mut self, kind: MaterialKind, id: &str) -> Result<usize, FormError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(FormError::EmptyMaterialId);
        }
        self.materials.push(Material {
            kind,
            id: id.to_string(),
        });
        Ok(self.materials.len() - 1)
    }

    pub fn remove_material(&mut self, index: usize) -> Option<Material> {
        (index < self.materials.len()).then(|| self.materials.remove(index))
    }

    /// Encode `grid` with `element` and append it as a base element.
    pub fn add_base_element(
        &mut self,
        grid: &Grid,
        element: Option<ElementTag>,
    ) -> Result<usize, FormError> {
        let element = element.ok_or(FormError::MissingElement)?;
        let id = grid.encode(element)?;
        self.base_elements.push(BaseElement { id });
        Ok(self.base_elements.len() - 1)
    }

    pub fn remove_base_element(&mut self, index: usize) -> Option<BaseElement> {
        (index < self.base_elements.len()).then(|| self.base_elements.remove(index))
    }

    /// Append a reward unlocked at `level` by `property`, whose grid is
    /// `grid` tagged with `element`.
    pub fn add_reward(
        &mut self,
        level: &str,
        property: Option<ElementTag>,
        grid: &Grid,
        element: Option<ElementTag>,
    ) -> Result<usize, FormError> {
        let level_text = level.trim();
        let level: i64 = level_text
            .parse()
            .map_err(|_| FormError::InvalidLevel(level_text.to_string()))?;
        let unlock_property = property.ok_or(FormError::MissingProperty)?;
        let element = element.ok_or(FormError::MissingElement)?;
        let id = grid.encode(element)?;
        self.rewards.push(Reward {
            level,
            unlock_property,
            id,
        });
        Ok(self.rewards.len() - 1)
    }

    pub fn remove_reward(&mut self, index: usize) -> Option<Reward> {
        (index < self.rewards.len()).then(|| self.rewards.remove(index))
    }

    /// Reset every field and list.
    pub fn clear(&mut self) {
        *self = RecipeForm::default();
    }

    /// Build the record from the current form state.
    pub fn build(&self) -> Result<RecipeRecord, FormError> {
        let id_text = self.id.trim();
        let id: i64 = id_text
            .parse()
            .map_err(|_| FormError::InvalidId(id_text.to_string()))?;

        Ok(RecipeRecord {
            id,
            name: self.name.clone(),
            tags: match &self.tag_list {
                Some(list) => list.clone(),
                None => split_tags(&self.tags),
            },
            materials: self.materials.clone(),
            base_elements: self.base_elements.clone(),
            rewards: self.rewards.clone(),
        })
    }
}

/// Split a tag line on ASCII or full-width commas, trimming each piece and
/// dropping empty ones.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(TAG_SEPARATORS)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
