//! Utility functions and helpers

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

/// List every file under `root` whose name ends with one of `extensions`.
///
/// Files come back in traversal order. Symbolic links to files are listed,
/// dangling links are skipped. A missing root is not an error: it logs a
/// warning and yields nothing.
pub fn list_files(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!("Directory does not exist: {} {:?}", root.display(), extensions);
        return Vec::new();
    }

    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        // Links to files count, links to directories are not descended
        .filter(|entry| {
            entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
        })
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            extensions.iter().any(|ext| name.ends_with(ext))
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Mirror `file` from `source_root` into `output_root`, keeping the relative
/// sub-path
pub fn mirror_path(file: &Path, source_root: &Path, output_root: &Path) -> Option<PathBuf> {
    file.strip_prefix(source_root)
        .ok()
        .map(|relative| output_root.join(relative))
}

/// Format duration as human-readable string
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f64();

    if secs >= 60.0 {
        let mins = (secs / 60.0).floor() as u64;
        let remaining_secs = secs - (mins as f64 * 60.0);
        format!("{}m {:.2}s", mins, remaining_secs)
    } else if secs >= 1.0 {
        format!("{:.2}s", secs)
    } else {
        format!("{:.0}ms", secs * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_list_files_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.css"));
        touch(&root.join("nested/b.css"));
        touch(&root.join("nested/deeper/c.ts"));
        touch(&root.join("nested/readme.md"));
        touch(&root.join("css"));

        let mut files = list_files(root, &[".css", ".ts"]);
        files.sort();

        let mut expected = vec![
            root.join("a.css"),
            root.join("nested/b.css"),
            root.join("nested/deeper/c.ts"),
        ];
        expected.sort();

        assert_eq!(files, expected);
    }

    #[test]
    fn test_list_files_skips_matching_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("theme.css")).unwrap();
        touch(&dir.path().join("theme.css/inner.css"));

        let files = list_files(dir.path(), &[".css"]);
        assert_eq!(files, vec![dir.path().join("theme.css/inner.css")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_includes_linked_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("css");
        touch(&dir.path().join("shared/theme.css"));
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(dir.path().join("shared/theme.css"), root.join("theme.css")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.css"), root.join("dangling.css")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("shared"), root.join("shared")).unwrap();

        let files = list_files(&root, &[".css"]);
        assert_eq!(files, vec![root.join("theme.css")]);
    }

    #[test]
    fn test_list_files_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_files(&dir.path().join("nope"), &[".css"]).is_empty());
    }

    #[test]
    fn test_list_files_empty_extension_set() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.css"));
        assert!(list_files(dir.path(), &[]).is_empty());
    }

    #[test]
    fn test_mirror_path() {
        let out = mirror_path(
            Path::new("internal/ui/css/pages/home.css"),
            Path::new("internal/ui/css"),
            Path::new("public/css"),
        );
        assert_eq!(out, Some(PathBuf::from("public/css/pages/home.css")));

        assert_eq!(
            mirror_path(Path::new("other/a.css"), Path::new("internal/ui/css"), Path::new("public/css")),
            None
        );
    }

    #[test]
    fn test_format_duration() {
        use std::time::Duration;

        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs_f64(1.5)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5.00s");
    }
}
