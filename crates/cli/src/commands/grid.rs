use std::process;

use ualchemia_core::{Grid, GridError};

use crate::config::SummarySettings;
use crate::summary::{element_label, render_grid};
use crate::OutputFormat;

pub(crate) fn cmd_grid_encode(cells: &str, element: Option<&str>, output: OutputFormat, quiet: bool) {
    let encoded = Grid::parse_cells(cells).and_then(|grid| {
        let values: Vec<u8> = grid.cells().iter().map(|c| c.value()).collect();
        ualchemia_core::encode_values(&values, element)
    });

    match encoded {
        Ok(id) => match output {
            OutputFormat::Text => println!("{}", id),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "id": id }))
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            ),
        },
        Err(e) => {
            report_grid_error(&e, output, quiet);
            process::exit(1);
        }
    }
}

pub(crate) fn cmd_grid_decode(id: &str, symbols: &SummarySettings, output: OutputFormat, quiet: bool) {
    match ualchemia_core::decode(id) {
        Ok((grid, tag)) => match output {
            OutputFormat::Text => {
                print!("{}", render_grid(&grid, symbols, ""));
                println!("Element: {}", element_label(tag));
            }
            OutputFormat::Json => {
                let cells: Vec<u8> = grid.cells().iter().map(|c| c.value()).collect();
                let json = serde_json::json!({
                    "cells": cells,
                    "element": tag.display_name(),
                    "code": tag.code().to_string(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json)
                        .unwrap_or_else(|e| format!("serialization error: {}", e))
                );
            }
        },
        Err(e) => {
            report_grid_error(&e, output, quiet);
            process::exit(1);
        }
    }
}

fn report_grid_error(e: &GridError, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", e),
        OutputFormat::Json => eprintln!(
            "{}",
            serde_json::to_string_pretty(&e.to_json_value()).unwrap_or_default()
        ),
    }
}
