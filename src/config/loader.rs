//! Config file loading

use super::MergeConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Table/mapping name a config may nest its keys under.
const SECTION: &str = "merge-sources";

const CANDIDATES: &[&str] = &[
    "merge-sources.toml",
    ".merge-sources.toml",
    "merge-sources.yml",
    ".merge-sources.yml",
    "merge-sources.yaml",
    ".merge-sources.yaml",
];

/// Load the config from `config_path`, or discover one in `search_dir`.
///
/// An explicitly given file must exist and parse. A discovered file that
/// fails to parse is skipped with a warning and defaults are used.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<MergeConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(MergeConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            tracing::warn!(
                "Ignoring auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(MergeConfig::default())
        }
    }
}

/// Parse TOML config, accepting keys at top level or under `[merge-sources]`.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<MergeConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val
        .try_into()
        .with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, accepting keys at top level or under `merge-sources:`.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<MergeConfig> {
    if content.trim().is_empty() {
        return Ok(MergeConfig::default());
    }

    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // A comment-only document deserializes as null
    if raw.is_null() {
        return Ok(MergeConfig::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| search_dir.join(candidate)).find(|path| path.is_file())
}
