//! Validates encoded recipes and the positive conformance fixtures against
//! the recipe schema at schema/recipe-schema.json.

use std::path::{Path, PathBuf};

use ualchemia_core::{ElementTag, Grid};
use ualchemia_interchange::{encode_recipe, MaterialKind, RecipeForm};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn validator() -> jsonschema::Validator {
    let schema_path = workspace_root().join("schema/recipe-schema.json");
    let schema_src = std::fs::read_to_string(&schema_path)
        .unwrap_or_else(|e| panic!("Failed to read schema at {}: {}", schema_path.display(), e));
    let schema_value: serde_json::Value = serde_json::from_str(&schema_src).unwrap();
    jsonschema::validator_for(&schema_value)
        .unwrap_or_else(|e| panic!("Failed to compile schema: {}", e))
}

#[test]
fn encoded_recipe_matches_schema() {
    let mut form = RecipeForm::new();
    form.id = "1001".into();
    form.name = "火焰药剂".into();
    form.tags = "药剂, 火".into();
    form.add_material(MaterialKind::Class, "herb").unwrap();
    form.add_material(MaterialKind::Material, "ember_moss").unwrap();
    let grid = Grid::parse_cells("100/020/001").unwrap();
    form.add_base_element(&grid, Some(ElementTag::Fire)).unwrap();
    form.add_reward("2", Some(ElementTag::Water), &grid, Some(ElementTag::Water))
        .unwrap();

    let text = encode_recipe(&form.build().unwrap()).unwrap();
    let instance: serde_json::Value = serde_json::from_str(&text).unwrap();
    let validator = validator();
    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| e.to_string())
        .collect();
    assert!(errors.is_empty(), "schema errors: {:?}", errors);
}

#[test]
fn schema_rejects_empty_grid_identifier() {
    let instance = serde_json::json!({
        "id": 1,
        "name": "x",
        "tags": [],
        "materials": [],
        "base_elements": [{"id": "000000000:R"}],
        "rewards": []
    });
    assert!(!validator().is_valid(&instance));
}

#[test]
fn schema_accepts_kind_for_material_type() {
    let recipe = |material: serde_json::Value| {
        serde_json::json!({
            "id": 1,
            "name": "x",
            "tags": [],
            "materials": [material],
            "base_elements": [],
            "rewards": []
        })
    };
    let validator = validator();
    assert!(validator.is_valid(&recipe(serde_json::json!({"kind": "class", "id": "herb"}))));
    assert!(validator.is_valid(&recipe(serde_json::json!({"type": "material", "id": "ore"}))));
    assert!(!validator.is_valid(&recipe(serde_json::json!({"kind": "potion", "id": "herb"}))));
    assert!(!validator.is_valid(&recipe(serde_json::json!({"id": "herb"}))));
}

#[test]
fn positive_conformance_fixtures_match_schema() {
    let dir = workspace_root().join("conformance/positive");
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", dir.display(), e))
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .collect();
    paths.sort();

    let validator = validator();
    let mut failures = Vec::new();
    for path in &paths {
        let src = std::fs::read_to_string(path).unwrap();
        let instance: serde_json::Value = serde_json::from_str(&src).unwrap();
        if let Err(error) = validator.validate(&instance) {
            failures.push(format!("{}: {}", path.display(), error));
        }
    }

    assert!(!paths.is_empty(), "No positive fixtures found -- check paths");
    assert!(
        failures.is_empty(),
        "Schema validation failed for {} of {} files:\n{}",
        failures.len(),
        paths.len(),
        failures.join("\n")
    );
}
