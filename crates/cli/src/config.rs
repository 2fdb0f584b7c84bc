//! `ualchemia.toml` configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [summary]
//! empty = "·"
//! circle = "o"
//! star = "*"
//!
//! [draft]
//! default_material_type = "material"
//! ```
//!
//! Every section and key is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use ualchemia_interchange::MaterialKind;

use crate::OutputFormat;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "UALCHEMIA_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "ualchemia.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub summary: SummarySettings,
    #[serde(default)]
    pub draft: DraftSettings,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Used when `--output` is not given.
    pub format: Option<OutputFormat>,
}

/// `[summary]` section: symbols for rendering grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarySettings {
    pub empty: String,
    pub circle: String,
    pub star: String,
}

impl Default for SummarySettings {
    fn default() -> Self {
        SummarySettings {
            empty: "□".to_string(),
            circle: "○".to_string(),
            star: "★".to_string(),
        }
    }
}

/// `[draft]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DraftSettings {
    /// Material type used when a draft material leaves `type` out.
    pub default_material_type: MaterialKind,
}

impl Default for DraftSettings {
    fn default() -> Self {
        DraftSettings {
            default_material_type: MaterialKind::Class,
        }
    }
}

/// Load configuration.
///
/// Lookup order: `explicit` (from `--config`), then `$UALCHEMIA_CONFIG`, then
/// `./ualchemia.toml`. With none of them present the defaults apply. A file
/// that is named but unreadable, or that does not parse, is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, String> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            }),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            read_config(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Read and parse a config TOML file from `path`.
pub fn read_config(path: &Path) -> Result<Config, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    parse_config(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
