//! A single merge run: enumerate, filter, sort, write.

use crate::domain::{MergeJob, MergeStats, SourceFile};
use crate::error::MergeError;
use crate::render::MergedWriter;
use crate::scan::scan_sources;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Merge every source file under `job.source_directory` into `job.output_path`.
///
/// The output is truncated before anything is written. If a source cannot
/// be read halfway through, the run stops and the output keeps whatever was
/// written up to that point.
pub fn merge(job: &MergeJob) -> Result<MergeStats, MergeError> {
    let sources = scan_sources(&job.source_directory, &job.output_path)?;
    tracing::debug!(
        "Merging {} files from {} into {}",
        sources.len(),
        job.source_directory.display(),
        job.output_path.display()
    );

    ensure_parent_dir(&job.output_path)?;

    let output = &job.output_path;
    let write_err =
        |source: std::io::Error| MergeError::WriteOutput { path: output.clone(), source };

    let file = File::create(output).map_err(write_err)?;
    let mut writer = MergedWriter::new(BufWriter::new(file));
    writer.write_preamble().map_err(write_err)?;

    for source in &sources {
        let contents = read_source(source)?;
        writer.write_source(&source.relative_path, &contents).map_err(write_err)?;
        tracing::debug!("Merged {} ({} bytes)", source.relative_path, contents.len());
    }

    // Flush explicitly so buffered write errors surface here instead of on drop.
    let (_file, bytes_written) = writer.finish().map_err(write_err)?;

    tracing::info!(
        files_merged = sources.len(),
        bytes_written,
        "Wrote merged output to {}",
        output.display()
    );

    Ok(MergeStats { output_path: output.clone(), files_merged: sources.len(), bytes_written })
}

fn ensure_parent_dir(output: &Path) -> Result<(), MergeError> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|source| MergeError::CreateOutputDir { path: parent.to_path_buf(), source }),
        _ => Ok(()),
    }
}

fn read_source(source: &SourceFile) -> Result<String, MergeError> {
    let path = &source.absolute_path;
    let bytes = fs::read(path)
        .map_err(|e| MergeError::ReadSource { path: path.clone(), source: e })?;
    String::from_utf8(bytes).map_err(|_| MergeError::InvalidUtf8(path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn count_markers(output: &str) -> usize {
        output.lines().filter(|l| l.starts_with("// MARK: - ")).count()
    }

    #[test]
    fn test_merge_two_directories() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(src.join("a")).unwrap();
        fs::create_dir_all(src.join("b")).unwrap();
        fs::write(src.join("a/X.swift"), "1").unwrap();
        fs::write(src.join("b/Y.swift"), "2").unwrap();

        let out = tmp.path().join("merged.swift");
        let stats = merge(&MergeJob::new(&src, &out)).unwrap();

        let merged = fs::read_to_string(&out).unwrap();
        assert_eq!(
            merged,
            "// Merged Swift Files\n\n\n// MARK: - a/X.swift\n\n1\n\n// MARK: - b/Y.swift\n\n2\n"
        );
        assert_eq!(stats.files_merged, 2);
        assert_eq!(stats.bytes_written, merged.len() as u64);
        assert_eq!(stats.output_path(), out.as_path());
    }

    #[test]
    fn test_merge_skips_other_extensions() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("notes.txt"), "not swift").unwrap();
        fs::write(src.join("App.swift"), "struct App {}").unwrap();

        let out = tmp.path().join("merged.swift");
        merge(&MergeJob::new(&src, &out)).unwrap();

        let merged = fs::read_to_string(&out).unwrap();
        assert!(!merged.contains("notes.txt"));
        assert!(!merged.contains("not swift"));
        assert_eq!(count_markers(&merged), 1);
    }

    #[test]
    fn test_merge_empty_source_writes_preamble_only() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(&src).unwrap();

        let out = tmp.path().join("merged.swift");
        let stats = merge(&MergeJob::new(&src, &out)).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "// Merged Swift Files\n\n");
        assert_eq!(stats.files_merged, 0);
    }

    #[test]
    fn test_merge_creates_missing_output_dir() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("App.swift"), "").unwrap();

        let out = tmp.path().join("build/nested/merged.swift");
        merge(&MergeJob::new(&src, &out)).unwrap();

        assert!(tmp.path().join("build/nested").is_dir());
        assert!(out.is_file());
    }

    #[test]
    fn test_merge_overwrites_previous_output() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("App.swift"), "new").unwrap();

        let out = tmp.path().join("merged.swift");
        fs::write(&out, "x".repeat(10_000)).unwrap();
        merge(&MergeJob::new(&src, &out)).unwrap();

        let merged = fs::read_to_string(&out).unwrap();
        assert!(!merged.contains('x'));
        assert!(merged.starts_with("// Merged Swift Files\n"));
    }

    #[test]
    fn test_merge_output_inside_source_is_not_an_input() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("App.swift"), "app").unwrap();

        let out = src.join("merged_code.swift");
        let first = merge(&MergeJob::new(&src, &out)).unwrap();
        let first_bytes = fs::read(&out).unwrap();

        // The second run sees its own previous output on disk.
        let second = merge(&MergeJob::new(&src, &out)).unwrap();
        let second_bytes = fs::read(&out).unwrap();

        assert_eq!(first.files_merged, 1);
        assert_eq!(second.files_merged, 1);
        assert_eq!(first_bytes, second_bytes);
        assert!(!String::from_utf8(second_bytes).unwrap().contains("merged_code.swift"));
    }

    #[test]
    fn test_merge_missing_source_fails_without_output() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("missing");
        let out = tmp.path().join("out/merged.swift");

        let err = merge(&MergeJob::new(&src, &out)).unwrap_err();
        assert!(matches!(err, MergeError::SourceMissing(_)));
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn test_merge_invalid_utf8_aborts() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("A.swift"), "fine").unwrap();
        fs::write(src.join("B.swift"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let out = tmp.path().join("merged.swift");
        let err = merge(&MergeJob::new(&src, &out)).unwrap_err();

        assert!(matches!(err, MergeError::InvalidUtf8(p) if p.ends_with("B.swift")));
        // Sections written before the failure stay in the output.
        let partial = fs::read_to_string(&out).unwrap();
        assert_eq!(partial, "// Merged Swift Files\n\n\n// MARK: - A.swift\n\nfine\n");
        assert!(!partial.contains("B.swift"));
    }

    #[test]
    fn test_read_source_vanished_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Gone.swift");
        fs::write(&path, "").unwrap();
        let source = SourceFile { absolute_path: path.clone(), relative_path: "Gone.swift".into() };
        fs::remove_file(&path).unwrap();

        let err = read_source(&source).unwrap_err();
        assert!(matches!(
            err,
            MergeError::ReadSource { path: p, source } if p == path
                && source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_merge_dangling_symlink_aborts_with_read_error() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("A.swift"), "a").unwrap();
        std::os::unix::fs::symlink(src.join("nowhere.swift"), src.join("B.swift")).unwrap();

        let out = tmp.path().join("merged.swift");
        let err = merge(&MergeJob::new(&src, &out)).unwrap_err();

        assert!(matches!(err, MergeError::ReadSource { path, .. } if path.ends_with("B.swift")));
        let partial = fs::read_to_string(&out).unwrap();
        assert!(partial.ends_with("// MARK: - A.swift\n\na\n"));
    }

    #[test]
    fn test_merge_output_parent_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("Sources");
        fs::create_dir_all(&src).unwrap();
        fs::write(tmp.path().join("blocker"), "").unwrap();

        let out = tmp.path().join("blocker/merged.swift");
        let err = merge(&MergeJob::new(&src, &out)).unwrap_err();

        assert!(matches!(err, MergeError::CreateOutputDir { .. }));
    }
}
