use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::args::CliArgs;
use deklass::{BodyLayout, EmitOptions, NewLineKind};

pub const CONFIG_FILE_NAME: &str = "deklass.json";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "v2";

/// Accept both `true` and `"true"` for boolean options.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

/// Contents of `deklass.json`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeklassConfig {
    #[serde(default)]
    pub new_line: Option<NewLineKind>,
    #[serde(default)]
    pub body_layout: Option<BodyLayout>,
    #[serde(default)]
    pub output_suffix: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub emit_all: Option<bool>,
}

pub fn parse_config(text: &str) -> Result<DeklassConfig> {
    serde_json::from_str(text).context("invalid deklass configuration")
}

pub fn load_config(path: &Path) -> Result<DeklassConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// `deklass.json` in `dir`, if present.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Options after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub emit: EmitOptions,
    pub output_suffix: String,
    pub emit_all: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            emit: EmitOptions::default(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            emit_all: false,
        }
    }
}

impl ResolvedOptions {
    /// Command-line flags win over config values.
    pub fn resolve(args: &CliArgs, config: &DeklassConfig) -> Self {
        let new_line = args
            .new_line
            .map(NewLineKind::from)
            .or(config.new_line)
            .unwrap_or_default();
        let body_layout = args
            .body_layout
            .map(BodyLayout::from)
            .or(config.body_layout)
            .unwrap_or_default();

        Self {
            emit: EmitOptions {
                new_line,
                body_layout,
            },
            output_suffix: config
                .output_suffix
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_SUFFIX.to_string()),
            emit_all: args.all || config.emit_all.unwrap_or(false),
        }
    }
}
