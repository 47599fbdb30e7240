//! Path normalization

use std::io;
use std::path::{Component, Path, PathBuf};

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Make `path` absolute against the working directory and fold `.`/`..`
/// components lexically. Symlinks are not resolved, so two spellings of
/// the same location compare equal without touching the filesystem.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let joined =
        if path.is_absolute() { path.to_path_buf() } else { std::env::current_dir()?.join(path) };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays `/`
                if !matches!(out.components().next_back(), Some(Component::RootDir) | None) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}

/// Render a path relative to the source root with `/` separators.
pub fn relative_display(path: &Path) -> String {
    normalize_path(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_backslashes() {
        assert_eq!(normalize_path("App\\Views\\Home.swift"), "App/Views/Home.swift");
        assert_eq!(normalize_path("App/App.swift"), "App/App.swift");
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_folds_dot_components() {
        let p = absolutize(Path::new("/a/./b/../c/d.swift")).unwrap();
        assert_eq!(p, PathBuf::from("/a/c/d.swift"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_parent_of_root() {
        let p = absolutize(Path::new("/../x")).unwrap();
        assert_eq!(p, PathBuf::from("/x"));
    }

    #[test]
    fn test_absolutize_relative_joins_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let p = absolutize(Path::new("out/./merged.swift")).unwrap();
        assert_eq!(p, cwd.join("out").join("merged.swift"));
    }

    #[test]
    fn test_absolutize_same_location_compares_equal() {
        let a = absolutize(Path::new("Sources/../merged.swift")).unwrap();
        let b = absolutize(Path::new("./merged.swift")).unwrap();
        assert_eq!(a, b);
    }
}
