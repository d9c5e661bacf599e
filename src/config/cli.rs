use crate::domain::ports::SourceTree;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed source tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSource;

impl LocalSource {
    pub fn new() -> Self {
        Self
    }

    fn walk(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("⏭️  Skipping unreadable directory {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            // 不跟隨目錄符號連結，避免循環
            match entry.file_type() {
                Ok(ft) if ft.is_dir() => self.walk(&path, files),
                Ok(ft) if ft.is_file() => files.push(path),
                Ok(ft) if ft.is_symlink() && path.is_file() => files.push(path),
                _ => {}
            }
        }
    }
}

impl SourceTree for LocalSource {
    fn files_under(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            return Vec::new();
        }

        let mut files = Vec::new();
        self.walk(root, &mut files);
        files.sort();
        files
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_files_under_recurses_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("b/nested")).unwrap();
        fs::write(dir.path().join("b/nested/deep.txt"), "x").unwrap();
        fs::write(dir.path().join("a.list"), "x").unwrap();
        fs::write(dir.path().join("b/hosts"), "x").unwrap();

        let files = LocalSource::new().files_under(dir.path());
        let rel: Vec<PathBuf> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.list"),
                PathBuf::from("b/hosts"),
                PathBuf::from("b/nested/deep.txt"),
            ]
        );
    }

    #[test]
    fn test_missing_or_file_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("list.txt");
        fs::write(&file, "||a.com^").unwrap();

        let source = LocalSource::new();
        assert!(source.files_under(&dir.path().join("missing")).is_empty());
        assert!(source.files_under(&file).is_empty());
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(LocalSource::new()
            .read_file(&dir.path().join("gone.txt"))
            .is_err());
    }
}
