//! Source file scanner

use crate::domain::{matches_extension, SourceFile};
use crate::error::MergeError;
use crate::utils::{absolutize, relative_display};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Scanner that discovers mergeable files under a source root.
pub struct SourceScanner {
    root_path: PathBuf,
    excluded: Option<PathBuf>,
}

impl SourceScanner {
    /// Create a new SourceScanner rooted at `root_path`.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path, excluded: None }
    }

    /// Never report `path`, compared by absolute path.
    ///
    /// Used to keep the merge output from being read back as an input. The
    /// path is made absolute when the scan runs.
    pub fn exclude(mut self, path: &Path) -> Self {
        self.excluded = Some(path.to_path_buf());
        self
    }

    /// Scan the source root and return matching files.
    ///
    /// Files are returned sorted by the bytes of their absolute path, so the
    /// order does not depend on how the filesystem enumerates directories.
    pub fn scan(&self) -> Result<Vec<SourceFile>, MergeError> {
        let root = self.checked_root()?;
        let excluded = match &self.excluded {
            Some(path) => Some(
                absolutize(path)
                    .map_err(|source| MergeError::ResolvePath { path: path.clone(), source })?,
            ),
            None => None,
        };

        let mut files = Vec::new();
        for entry_result in WalkDir::new(&root).follow_links(false) {
            let entry = entry_result
                .map_err(|source| MergeError::Walk { root: self.root_path.clone(), source })?;

            if !is_candidate(&entry) {
                continue;
            }

            let path = entry.path();
            if excluded.as_deref() == Some(path) {
                tracing::debug!("Skipping merge output {}", path.display());
                continue;
            }

            let rel_path = match path.strip_prefix(&root) {
                Ok(p) => relative_display(p),
                Err(_) => continue,
            };

            tracing::debug!("Found source file {}", rel_path);
            files.push(SourceFile { absolute_path: path.to_path_buf(), relative_path: rel_path });
        }

        files.sort_by(|a, b| path_bytes(&a.absolute_path).cmp(path_bytes(&b.absolute_path)));

        Ok(files)
    }

    fn checked_root(&self) -> Result<PathBuf, MergeError> {
        let metadata = std::fs::metadata(&self.root_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                MergeError::SourceMissing(self.root_path.clone())
            } else {
                MergeError::SourceUnreadable { path: self.root_path.clone(), source }
            }
        })?;
        if !metadata.is_dir() {
            return Err(MergeError::SourceNotDirectory(self.root_path.clone()));
        }
        absolutize(&self.root_path).map_err(|source| MergeError::ResolvePath {
            path: self.root_path.clone(),
            source,
        })
    }
}

fn path_bytes(path: &Path) -> &[u8] {
    path.as_os_str().as_encoded_bytes()
}

/// A regular file, or a symlink that does not point at a directory, whose
/// name matches.
///
/// Symlinked directories are never descended. A dangling symlink stays a
/// candidate so that reading it fails the run instead of dropping it.
fn is_candidate(entry: &DirEntry) -> bool {
    if !matches_extension(entry.path()) {
        return false;
    }
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        if !entry.path().exists() {
            tracing::debug!("Keeping dangling symlink {}", entry.path().display());
        }
        return !entry.path().is_dir();
    }
    file_type.is_file()
}
