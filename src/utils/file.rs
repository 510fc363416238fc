use anyhow::{Error, bail};
use glob::Pattern;
use std::path::{Component, Path, PathBuf};

/// Check if a path should be excluded based on a list of glob patterns.
///
/// Patterns are tried against the full path and against the bare file name.
pub fn is_path_excluded(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    exclude_patterns
        .iter()
        .any(|pattern| pattern.matches(&path_str) || pattern.matches(&file_name))
}

/// Path of `path` relative to `root`, with `.` components removed.
///
/// Relative inputs are taken as relative to `root` already. Absolute inputs
/// must live beneath `root`.
pub fn relative_to_root(root: &Path, path: &Path) -> Result<PathBuf, Error> {
    let relative = if path.is_absolute() {
        match path.strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => bail!(
                "{} is outside the repository root {}",
                path.display(),
                root.display()
            ),
        }
    } else {
        path
    };

    let mut normalized = PathBuf::new();
    for component in relative.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    bail!("{} escapes the repository root", path.display());
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        bail!("{} does not name a file", path.display());
    }
    Ok(normalized)
}

/// `/`-separated form of a relative path, independent of the host separator.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Location of the `.license` sidecar that annotates `path`.
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut sidecar = path.as_os_str().to_owned();
    sidecar.push(".license");
    PathBuf::from(sidecar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_path_excluded_matches_file_name_and_full_path() {
        let patterns = vec![
            Pattern::new("*.lock").unwrap(),
            Pattern::new("vendor/*").unwrap(),
        ];

        assert!(is_path_excluded(Path::new("deep/dir/Cargo.lock"), &patterns));
        assert!(is_path_excluded(Path::new("vendor/lib.c"), &patterns));
        assert!(!is_path_excluded(Path::new("src/lib.c"), &patterns));
    }

    #[test]
    fn test_relative_to_root() {
        let root = Path::new("/repo");

        assert_eq!(
            relative_to_root(root, Path::new("./src/./main.rs")).unwrap(),
            PathBuf::from("src/main.rs")
        );
        assert_eq!(
            relative_to_root(root, Path::new("/repo/src/main.rs")).unwrap(),
            PathBuf::from("src/main.rs")
        );
        assert_eq!(
            relative_to_root(root, Path::new("src/../README.md")).unwrap(),
            PathBuf::from("README.md")
        );
    }

    #[test]
    fn test_relative_to_root_rejects_outside_paths() {
        let root = Path::new("/repo");

        assert!(relative_to_root(root, Path::new("/elsewhere/a.c")).is_err());
        assert!(relative_to_root(root, Path::new("../a.c")).is_err());
        assert!(relative_to_root(root, Path::new(".")).is_err());
    }

    #[test]
    fn test_to_slash_path() {
        let path: PathBuf = ["src", "deep", "lib.rs"].iter().collect();
        assert_eq!(to_slash_path(&path), "src/deep/lib.rs");
    }

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            sidecar_path(Path::new("assets/logo.png")),
            PathBuf::from("assets/logo.png.license")
        );
    }
}
