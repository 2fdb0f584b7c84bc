mod commands;
mod config;
mod draft;
mod runner;
mod summary;
mod tap;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use ualchemia_interchange::RecipeError;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Alchemy recipe authoring tool.
#[derive(Parser)]
#[command(name = "ualchemia", version, about = "Alchemy recipe authoring tool")]
struct Cli {
    /// Output format (text or json); defaults to the config file, then text
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log debug detail to stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    verbose: bool,

    /// Path to a ualchemia.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode or decode a single grid identifier
    Grid {
        #[command(subcommand)]
        command: GridCommands,
    },

    /// Build a recipe JSON document from a TOML draft
    Encode {
        /// Path to the .toml draft
        draft: PathBuf,
        /// Write the JSON to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Decode a recipe JSON document and print a summary
    Decode {
        /// Path to the recipe JSON file ('-' for stdin)
        file: PathBuf,
    },

    /// Validate a recipe JSON document against the recipe schema
    Validate {
        /// Path to the recipe JSON file ('-' for stdin)
        file: PathBuf,
    },

    /// Run the conformance test suite
    Test {
        /// Path to the conformance suite directory
        #[arg(default_value = "conformance")]
        suite_dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum GridCommands {
    /// Encode nine cell digits (0 empty, 1 circle, 2 star) and an element
    Encode {
        /// Cells in row-major order, e.g. 100020001 or 100/020/001
        cells: String,
        /// Element: display name (火系), English name (fire) or code (R)
        #[arg(long)]
        element: Option<String>,
    },

    /// Decode a grid identifier such as 100020001:R
    Decode {
        /// The grid identifier
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(msg) => {
            let output = cli.output.unwrap_or(OutputFormat::Text);
            report_error(&format!("error: {}", msg), output, cli.quiet);
            process::exit(1);
        }
    };
    let output = cli
        .output
        .or(config.output.format)
        .unwrap_or(OutputFormat::Text);

    match cli.command {
        Commands::Grid { command } => match command {
            GridCommands::Encode { cells, element } => {
                commands::grid::cmd_grid_encode(&cells, element.as_deref(), output, cli.quiet);
            }
            GridCommands::Decode { id } => {
                commands::grid::cmd_grid_decode(&id, &config.summary, output, cli.quiet);
            }
        },
        Commands::Encode { draft, out } => {
            commands::encode::cmd_encode(&draft, out.as_deref(), &config, output, cli.quiet);
        }
        Commands::Decode { file } => {
            commands::decode::cmd_decode(&file, &config.summary, output, cli.quiet);
        }
        Commands::Validate { file } => {
            commands::validate::cmd_validate(&file, output, cli.quiet);
        }
        Commands::Test { suite_dir } => {
            commands::test::cmd_test(&suite_dir);
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

/// Report a recipe failure: its message as text, or its structured form as
/// JSON.
pub(crate) fn report_recipe_error(e: &RecipeError, output: OutputFormat, quiet: bool) {
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
