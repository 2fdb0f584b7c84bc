//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `ualchemia` binary and verify
//! exit codes, stdout content, and stderr content.
//!
//! All tests set `current_dir` to the workspace root so that relative
//! paths to conformance fixtures and sample drafts resolve correctly.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

/// Helper: create a Command for the `ualchemia` binary, rooted at workspace.
fn ualchemia() -> Command {
    let mut cmd = cargo_bin_cmd!("ualchemia");
    cmd.current_dir(workspace_root());
    cmd.env_remove("UALCHEMIA_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    ualchemia()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alchemy recipe authoring tool"));
}

#[test]
fn version_exits_0() {
    ualchemia()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ualchemia"));
}

// ──────────────────────────────────────────────
// 2. Grid subcommands
// ──────────────────────────────────────────────

#[test]
fn grid_encode_diagonal_fire() {
    ualchemia()
        .args(["grid", "encode", "100020001", "--element", "火系"])
        .assert()
        .success()
        .stdout("100020001:R\n");
}

#[test]
fn grid_encode_accepts_row_separators_and_codes() {
    ualchemia()
        .args(["grid", "encode", "010/111/010", "--element", "B"])
        .assert()
        .success()
        .stdout("010111010:B\n");
}

#[test]
fn grid_encode_empty_grid_exits_1() {
    ualchemia()
        .args(["grid", "encode", "000000000", "--element", "R"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at least one non-empty cell"));
}

#[test]
fn grid_encode_without_element_exits_1() {
    ualchemia()
        .args(["grid", "encode", "100000000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid element tag"));
}

#[test]
fn grid_decode_renders_cells() {
    ualchemia()
        .args(["grid", "decode", "100020001:R"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ □ □\n□ ★ □\n□ □ ○\n"))
        .stdout(predicate::str::contains("Element: 火系 (Fire)"));
}

#[test]
fn grid_decode_json_output() {
    let output = ualchemia()
        .args(["--output", "json", "grid", "decode", "100020001:R"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["cells"], serde_json::json!([1, 0, 0, 0, 2, 0, 0, 0, 1]));
    assert_eq!(v["element"], "火系");
    assert_eq!(v["code"], "R");
}

#[test]
fn grid_decode_invalid_character_json_error() {
    let output = ualchemia()
        .args(["--output", "json", "grid", "decode", "12345678A:R"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(v["error"], "InvalidCharacter");
    assert_eq!(v["character"], "A");
}

#[test]
fn grid_decode_quiet_suppresses_stderr() {
    ualchemia()
        .args(["--quiet", "grid", "decode", "000000000:R"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

// ──────────────────────────────────────────────
// 3. Encode subcommand
// ──────────────────────────────────────────────

#[test]
fn encode_sample_draft_to_stdout() {
    ualchemia()
        .args(["encode", "drafts/fire_potion.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"火焰药剂\""))
        .stdout(predicate::str::contains("\"id\": \"100020001:R\""))
        .stdout(predicate::str::contains("\"id\": \"010010010:R\""))
        .stdout(predicate::str::contains("\"property\": \"火系\""));
}

#[test]
fn encode_writes_file_that_decodes() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("recipe.json");
    ualchemia()
        .args(["encode", "drafts/fire_potion.toml", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));

    let written = fs::read_to_string(&out).unwrap();
    let v: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(v["id"], 1001);
    assert_eq!(v["tags"], serde_json::json!(["药剂", "火"]));

    ualchemia()
        .arg("decode")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1001"));
}

#[test]
fn encode_rejects_non_integer_id() {
    let tmp = TempDir::new().unwrap();
    let draft = write_file(&tmp, "bad.toml", "id = \"abc\"\nname = \"x\"\n");
    ualchemia()
        .arg("encode")
        .arg(&draft)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("recipe id must be an integer"));
}

#[test]
fn encode_reports_entry_index() {
    let tmp = TempDir::new().unwrap();
    let draft = write_file(
        &tmp,
        "bad.toml",
        "id = 1\n[[rewards]]\nlevel = 1\nproperty = \"火系\"\ngrid = \"000000000\"\nelement = \"R\"\n",
    );
    ualchemia()
        .arg("encode")
        .arg(&draft)
        .assert()
        .failure()
        .stderr(predicate::str::contains("rewards[0]"));
}

#[test]
fn encode_uses_config_default_material_type() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(
        &tmp,
        "ualchemia.toml",
        "[draft]\ndefault_material_type = \"material\"\n",
    );
    let draft = write_file(&tmp, "d.toml", "id = 1\n[[materials]]\nid = \"quartz\"\n");
    ualchemia()
        .arg("--config")
        .arg(&config)
        .arg("encode")
        .arg(&draft)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"material\""));
}

// ──────────────────────────────────────────────
// 4. Decode subcommand
// ──────────────────────────────────────────────

#[test]
fn decode_positive_fixture_summary() {
    ualchemia()
        .args(["decode", "conformance/positive/fire_potion.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: 火焰药剂"))
        .stdout(predicate::str::contains("Material 2: type material, id ember_moss"))
        .stdout(predicate::str::contains("Unlock property: 火系 (Fire)"));
}

#[test]
fn decode_json_output_is_canonical() {
    let path = workspace_root().join("conformance/positive/every_element.json");
    let original = fs::read_to_string(&path).unwrap();
    ualchemia()
        .args(["--output", "json", "decode"])
        .arg(&path)
        .assert()
        .success()
        .stdout(original);
}

#[test]
fn decode_from_stdin() {
    ualchemia()
        .args(["decode", "-"])
        .write_stdin(
            r#"{"id": 3, "name": "n", "tags": ["t"], "materials": [], "base_elements": [], "rewards": []}"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 3"));
}

#[test]
fn decode_missing_rewards_exits_1() {
    ualchemia()
        .args(["decode", "conformance/negative/missing_rewards.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required field: 'rewards'"));
}

#[test]
fn decode_empty_grid_json_error() {
    let output = ualchemia()
        .args([
            "--output",
            "json",
            "decode",
            "conformance/negative/empty_base_grid.json",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(v["error"], "BaseElementGridInvalid");
    assert_eq!(v["index"], 0);
    assert_eq!(v["grid"]["error"], "EmptyGrid");
}

#[test]
fn decode_nonexistent_file_exits_1() {
    ualchemia()
        .args(["decode", "nonexistent_file_xyz.json"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn decode_verbose_logs_to_stderr() {
    ualchemia()
        .args(["--verbose", "decode", "conformance/positive/fire_potion.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("decoded recipe"));

    ualchemia()
        .args(["decode", "conformance/positive/fire_potion.json"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ──────────────────────────────────────────────
// 5. Validate subcommand
// ──────────────────────────────────────────────

#[test]
fn validate_valid_recipe_exits_0() {
    ualchemia()
        .args(["validate", "conformance/positive/fire_potion.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn validate_invalid_recipe_lists_errors() {
    ualchemia()
        .args(["validate", "conformance/negative/unknown_element_code.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid recipe"))
        .stderr(predicate::str::contains("base_elements[1]"));
}

#[test]
fn validate_and_decode_agree_on_kind_alias() {
    let tmp = TempDir::new().unwrap();
    let doc = write_file(
        &tmp,
        "kind.json",
        r#"{"id": 5, "name": "盐", "tags": [], "materials": [{"kind": "class", "id": "herb"}], "base_elements": [{"id": "100020001:R"}], "rewards": []}"#,
    );
    ualchemia()
        .arg("validate")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
    ualchemia()
        .arg("decode")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("type class, id herb"));
}

#[test]
fn validate_invalid_json_exits_1() {
    let tmp = TempDir::new().unwrap();
    let bad = write_file(&tmp, "bad.json", "{not json");
    ualchemia()
        .arg("validate")
        .arg(&bad)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error parsing JSON"));
}

// ──────────────────────────────────────────────
// 6. Test subcommand
// ──────────────────────────────────────────────

#[test]
fn conformance_suite_passes() {
    ualchemia()
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::contains("TAP version 14"))
        .stdout(predicate::str::contains("# fail  0"));
}

#[test]
fn conformance_missing_dir_exits_1() {
    ualchemia()
        .args(["test", "no_such_suite_dir"])
        .assert()
        .failure()
        .code(1);
}

// ──────────────────────────────────────────────
// 7. Config
// ──────────────────────────────────────────────

#[test]
fn config_sets_default_output_and_symbols() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(
        &tmp,
        "c.toml",
        "[summary]\nempty = \".\"\ncircle = \"o\"\nstar = \"*\"\n",
    );
    ualchemia()
        .arg("--config")
        .arg(&config)
        .args(["grid", "decode", "100020001:Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("o . .\n. * .\n. . o\n"));

    let config = write_file(&tmp, "j.toml", "[output]\nformat = \"json\"\n");
    ualchemia()
        .arg("--config")
        .arg(&config)
        .args(["grid", "encode", "100000000", "--element", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"100000000:G\""));
}

#[test]
fn malformed_config_exits_1() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(&tmp, "c.toml", "[unknown]\n");
    ualchemia()
        .arg("--config")
        .arg(&config)
        .args(["grid", "decode", "100020001:R"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not parse"));
}
