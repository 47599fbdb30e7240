//! Core data types shared by the scanner, the renderer and the merge run.

use std::path::{Path, PathBuf};

/// Suffix a file name must end with to be merged. Matched case-sensitively.
pub const SOURCE_EXTENSION: &str = ".swift";

/// First line of every merged output.
pub const PREAMBLE: &str = "// Merged Swift Files";

/// Prefix of the per-file separator line.
pub const MARKER_PREFIX: &str = "// MARK: - ";

/// Source directory used when neither the CLI nor a config file names one.
pub const DEFAULT_SOURCE_DIR: &str = "Sources";

/// Output file used when neither the CLI nor a config file names one.
pub const DEFAULT_OUTPUT_PATH: &str = "merged_code.swift";

/// A file selected for merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute, lexically normalized path used for reading and ordering
    pub absolute_path: PathBuf,
    /// Path relative to the source directory, `/`-separated
    pub relative_path: String,
}

/// Inputs of a single merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeJob {
    pub source_directory: PathBuf,
    pub output_path: PathBuf,
}

impl MergeJob {
    pub fn new(source_directory: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self { source_directory: source_directory.into(), output_path: output_path.into() }
    }
}

impl Default for MergeJob {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_DIR, DEFAULT_OUTPUT_PATH)
    }
}

/// Outcome of a successful merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStats {
    pub output_path: PathBuf,
    pub files_merged: usize,
    pub bytes_written: u64,
}

impl MergeStats {
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Whether `path`'s file name carries the merge extension.
pub fn matches_extension(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()).is_some_and(|name| name.ends_with(SOURCE_EXTENSION))
}
