//! Configuration loading and resolution
//!
//! Paths come from CLI flags, then a config file, then built-in defaults,
//! in that order of precedence.

use serde::Deserialize;
use std::path::PathBuf;

pub mod loader;
pub mod resolve;

pub use loader::load_config;
pub use resolve::{resolve_job, CliOverrides};

/// Settings read from a `merge-sources.toml` / `.yml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    /// Directory to scan for sources
    pub source_dir: Option<PathBuf>,
    /// File to write the merged output to
    pub output: Option<PathBuf>,
}
