use std::path::Path;
use std::process;

use crate::commands::decode::read_input;
use crate::{report_error, OutputFormat};

static RECIPE_SCHEMA_STR: &str = include_str!("../../../../schema/recipe-schema.json");

pub(crate) fn cmd_validate(path: &Path, output: OutputFormat, quiet: bool) {
    let schema: serde_json::Value = match serde_json::from_str(RECIPE_SCHEMA_STR) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("internal error: failed to parse embedded recipe schema: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let validator = match jsonschema::validator_for(&schema) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("internal error: failed to compile schema: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let doc_str = match read_input(path) {
        Ok(s) => s,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let doc: serde_json::Value = match serde_json::from_str(&doc_str) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error parsing JSON in '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let mut errors: Vec<String> = validator
        .iter_errors(&doc)
        .map(|e| format!("{}", e))
        .collect();

    // The schema cannot express everything decoding checks; run both.
    if let Err(e) = ualchemia_interchange::decode_recipe_value(&doc) {
        errors.push(e.to_string());
    }

    if errors.is_empty() {
        if !quiet {
            match output {
                OutputFormat::Text => println!("valid"),
                OutputFormat::Json => println!("{{\"valid\": true}}"),
            }
        }
    } else {
        match output {
            OutputFormat::Text => {
                if !quiet {
                    eprintln!("invalid recipe");
                    for err in &errors {
                        eprintln!("  - {}", err);
                    }
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "valid": false,
                    "errors": errors
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&json).unwrap_or_default()
                );
            }
        }
        process::exit(1);
    }
}
