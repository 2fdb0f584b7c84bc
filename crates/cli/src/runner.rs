//! Conformance suite runner.
//!
//! Convention:
//!   positive/  -- *.json recipes that must decode and re-encode to an equal document
//!   negative/  -- *.json + *.expected-error.json (decode must fail with that error)
//!
//! Expected errors are compared as a subset: every key in the expected
//! object must match the actual error's JSON form, so fixtures can leave
//! out `message`.

use std::path::{Path, PathBuf};

use serde_json::Value;
use ualchemia_interchange::{decode_recipe, encode_recipe};

use crate::tap::Tap;

pub struct RunResult {
    pub failed: usize,
}

pub fn run_suite(suite_dir: &Path) -> RunResult {
    let mut tap = Tap::new();

    run_positive_dir(suite_dir, "positive", &mut tap);
    run_negative_dir(suite_dir, "negative", &mut tap);

    let failed = tap.failure_count();
    tap.finish();

    RunResult { failed }
}

fn run_positive_dir(suite_dir: &Path, subdir: &str, tap: &mut Tap) {
    let dir = suite_dir.join(subdir);
    if !dir.exists() {
        return;
    }
    let mut entries = glob_recipe_files(&dir);
    entries.sort();
    for path in &entries {
        run_positive_test(path, &stem(path), subdir, tap);
    }
}

fn run_negative_dir(suite_dir: &Path, subdir: &str, tap: &mut Tap) {
    let dir = suite_dir.join(subdir);
    if !dir.exists() {
        return;
    }
    let mut entries = glob_recipe_files(&dir);
    entries.sort();
    for path in &entries {
        let stem = stem(path);
        let expected_path = dir.join(format!("{}.expected-error.json", stem));
        if !expected_path.exists() {
            tap.not_ok(
                format!("{}/{}", subdir, stem),
                format!("missing expected-error file: {}", expected_path.display()),
            );
            continue;
        }
        run_negative_test(path, &expected_path, &stem, subdir, tap);
    }
}

fn run_positive_test(path: &Path, name: &str, category: &str, tap: &mut Tap) {
    let test_name = format!("{}/{}", category, name);

    let src = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            tap.not_ok(&test_name, format!("cannot read {}: {}", path.display(), e));
            return;
        }
    };
    let original: Value = match serde_json::from_str(&src) {
        Ok(v) => v,
        Err(e) => {
            tap.not_ok(&test_name, format!("invalid JSON: {}", e));
            return;
        }
    };

    let record = match decode_recipe(&src) {
        Ok(r) => r,
        Err(e) => {
            tap.not_ok(&test_name, format!("unexpected decode error: {}", e));
            return;
        }
    };

    let reencoded = match encode_recipe(&record)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<Value>(&text).map_err(|e| e.to_string()))
    {
        Ok(v) => v,
        Err(e) => {
            tap.not_ok(&test_name, format!("re-encode failed: {}", e));
            return;
        }
    };

    if json_equal(&original, &reencoded) {
        tap.ok(&test_name);
    } else {
        let diff = json_diff(&original, &reencoded);
        tap.not_ok(&test_name, format!("round-trip mismatch:\n{}", diff));
    }
}

fn run_negative_test(
    path: &Path,
    expected_error_path: &Path,
    name: &str,
    category: &str,
    tap: &mut Tap,
) {
    let test_name = format!("{}/{}", category, name);

    let expected_error = match read_json(expected_error_path) {
        Ok(v) => v,
        Err(e) => {
            tap.not_ok(
                &test_name,
                format!("failed to read expected-error file: {}", e),
            );
            return;
        }
    };

    let src = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            tap.not_ok(&test_name, format!("cannot read {}: {}", path.display(), e));
            return;
        }
    };

    match decode_recipe(&src) {
        Err(got_error) => {
            let got_json = got_error.to_json_value();
            if json_subset(&expected_error, &got_json) {
                tap.ok(&test_name);
            } else {
                let diff = json_diff(&expected_error, &got_json);
                tap.not_ok(&test_name, format!("error mismatch:\n{}", diff));
            }
        }
        Ok(_) => {
            tap.not_ok(&test_name, "expected a decode error but decoding succeeded");
        }
    }
}

// -- Helpers --

/// Recipe documents in `dir`, excluding expected-error sidecars.
fn glob_recipe_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
            let is_sidecar = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(".expected-error.json"));
            if is_json && !is_sidecar {
                results.push(path);
            }
        }
    }
    results
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn read_json(path: &Path) -> Result<Value, String> {
    let src = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&src).map_err(|e| format!("invalid JSON in {}: {}", path.display(), e))
}

/// Deep equality of two JSON values, normalizing number types.
fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(am), Value::Object(bm)) => {
            if am.len() != bm.len() {
                return false;
            }
            am.iter()
                .all(|(k, v)| bm.get(k).is_some_and(|bv| json_equal(v, bv)))
        }
        (Value::Array(av), Value::Array(bv)) => {
            av.len() == bv.len() && av.iter().zip(bv).all(|(a, b)| json_equal(a, b))
        }
        (Value::Number(an), Value::Number(bn)) => an.as_f64() == bn.as_f64(),
        _ => a == b,
    }
}

/// Every key of `expected` is present in `got` with a matching value;
/// nested objects are compared the same way.
fn json_subset(expected: &Value, got: &Value) -> bool {
    match (expected, got) {
        (Value::Object(em), Value::Object(gm)) => em
            .iter()
            .all(|(k, v)| gm.get(k).is_some_and(|gv| json_subset(v, gv))),
        _ => json_equal(expected, got),
    }
}

fn json_diff(expected: &Value, got: &Value) -> String {
    let exp_str = serde_json::to_string_pretty(expected).unwrap_or_default();
    let got_str = serde_json::to_string_pretty(got).unwrap_or_default();
    format!("--- expected\n{}\n+++ got\n{}", exp_str, got_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subset_ignores_extra_keys() {
        let expected = json!({"error": "BaseElementGridInvalid", "grid": {"error": "EmptyGrid"}});
        let got = json!({
            "error": "BaseElementGridInvalid",
            "message": "...",
            "index": 0,
            "grid": {"error": "EmptyGrid", "message": "..."}
        });
        assert!(json_subset(&expected, &got));
        assert!(!json_subset(&got, &expected));
    }

    #[test]
    fn equal_normalizes_numbers() {
        assert!(json_equal(&json!({"a": 1}), &json!({"a": 1.0})));
        assert!(!json_equal(&json!([1, 2]), &json!([2, 1])));
    }
}
