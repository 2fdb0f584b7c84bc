use std::path::Path;
use std::process;

use ualchemia_interchange::encode_recipe;

use crate::config::Config;
use crate::draft::load_draft;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_encode(
    draft_path: &Path,
    out: Option<&Path>,
    config: &Config,
    output: OutputFormat,
    quiet: bool,
) {
    let form = match load_draft(draft_path, &config.draft) {
        Ok(f) => f,
        Err(msg) => {
            report_error(&format!("error: {}", msg), output, quiet);
            process::exit(1);
        }
    };

    let record = match form.build() {
        Ok(r) => r,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    let text = match encode_recipe(&record) {
        Ok(t) => t,
        Err(e) => {
            crate::report_recipe_error(&e, output, quiet);
            process::exit(1);
        }
    };

    let Some(out_path) = out else {
        println!("{}", text);
        return;
    };

    if let Err(e) = std::fs::write(out_path, format!("{}\n", text)) {
        let msg = format!("error writing file '{}': {}", out_path.display(), e);
        report_error(&msg, output, quiet);
        process::exit(1);
    }
    tracing::info!(path = %out_path.display(), recipe_id = record.id, "wrote recipe");

    if !quiet {
        match output {
            OutputFormat::Text => println!("wrote {}", out_path.display()),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "written": out_path.display().to_string() })
            ),
        }
    }
}
