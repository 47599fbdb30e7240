//! Source file discovery

use crate::domain::SourceFile;
use crate::error::MergeError;
use std::path::Path;

pub mod scanner;

pub use scanner::SourceScanner;

/// Files under `root` that a merge into `output` would include, in merge order.
pub fn scan_sources<P: AsRef<Path>>(root: P, output: &Path) -> Result<Vec<SourceFile>, MergeError> {
    SourceScanner::new(root.as_ref().to_path_buf()).exclude(output).scan()
}
