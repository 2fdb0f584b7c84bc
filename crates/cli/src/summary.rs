//! `ualchemia decode` — human-readable recipe summary.
//!
//! Sections: header (id, name, tags), materials, base elements and rewards.
//! Each grid is drawn as three rows of cell symbols followed by its element.

use std::fmt::Write;

use ualchemia_core::{ElementTag, Grid, GridCell};
use ualchemia_interchange::RecipeRecord;

use crate::config::SummarySettings;

pub fn render_recipe(record: &RecipeRecord, symbols: &SummarySettings) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "ID: {}", record.id);
    let _ = writeln!(out, "Name: {}", record.name);
    let _ = writeln!(out, "Tags: {}", record.tags.join(", "));
    out.push('\n');

    out.push_str("Materials:\n");
    for (i, material) in record.materials.iter().enumerate() {
        let _ = writeln!(
            out,
            "  Material {}: type {}, id {}",
            i + 1,
            material.kind.as_str(),
            material.id
        );
    }
    out.push('\n');

    out.push_str("Base elements:\n");
    for (i, element) in record.base_elements.iter().enumerate() {
        let _ = writeln!(out, "  Element {}:", i + 1);
        write_grid_section(&mut out, &element.id, symbols);
        out.push('\n');
    }

    out.push_str("Rewards:\n");
    for (i, reward) in record.rewards.iter().enumerate() {
        let _ = writeln!(out, "  Reward {}:", i + 1);
        let _ = writeln!(out, "    Level: {}", reward.level);
        let _ = writeln!(
            out,
            "    Unlock property: {}",
            element_label(reward.unlock_property)
        );
        write_grid_section(&mut out, &reward.id, symbols);
        out.push('\n');
    }

    out
}

fn write_grid_section(out: &mut String, id: &str, symbols: &SummarySettings) {
    match ualchemia_core::decode(id) {
        Ok((grid, tag)) => {
            out.push_str("    Grid:\n");
            out.push_str(&render_grid(&grid, symbols, "      "));
            let _ = writeln!(out, "    Element: {}", element_label(tag));
        }
        Err(e) => {
            let _ = writeln!(out, "    Grid: {} (invalid: {})", id, e);
        }
    }
}

/// Draw a grid as three lines, each prefixed with `indent`.
pub fn render_grid(grid: &Grid, symbols: &SummarySettings, indent: &str) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let cells: Vec<&str> = row.iter().map(|&c| symbol(c, symbols)).collect();
        let _ = writeln!(out, "{}{}", indent, cells.join(" "));
    }
    out
}

/// `火系 (Fire)`
pub fn element_label(tag: ElementTag) -> String {
    format!("{} ({})", tag.display_name(), tag.english_name())
}

fn symbol(cell: GridCell, symbols: &SummarySettings) -> &str {
    match cell {
        GridCell::Empty => &symbols.empty,
        GridCell::Circle => &symbols.circle,
        GridCell::Star => &symbols.star,
    }
}
