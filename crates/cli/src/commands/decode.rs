use std::io::Read;
use std::path::Path;
use std::process;

use ualchemia_interchange::{decode_recipe, encode_recipe};

use crate::config::SummarySettings;
use crate::summary::render_recipe;
use crate::{report_error, OutputFormat};

/// Read a whole document from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("error reading stdin: {}", e))?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| format!("error reading file '{}': {}", path.display(), e))
}

pub(crate) fn cmd_decode(path: &Path, symbols: &SummarySettings, output: OutputFormat, quiet: bool) {
    let text = match read_input(path) {
        Ok(t) => t,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    if text.trim().is_empty() {
        report_error("error: input is empty", output, quiet);
        process::exit(1);
    }

    let record = match decode_recipe(&text) {
        Ok(r) => r,
        Err(e) => {
            crate::report_recipe_error(&e, output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Text => print!("{}", render_recipe(&record, symbols)),
        OutputFormat::Json => match encode_recipe(&record) {
            Ok(canonical) => println!("{}", canonical),
            Err(e) => {
                crate::report_recipe_error(&e, output, quiet);
                process::exit(1);
            }
        },
    }
}
