use std::path::{Path, PathBuf};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::convert::error::{ConvertError, Result};
use crate::convert::types::STYLESHEET_EXTENSION;
use crate::utils::file_utils;

/// File collector for finding stylesheet files
#[derive(Debug)]
pub struct FileCollector {
    /// Extension a file must carry to be collected (exact match)
    extension: String,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a new file collector matching `.css` files
    pub fn new() -> Self {
        Self {
            extension: STYLESHEET_EXTENSION.to_string(),
        }
    }

    /// Collect every matching file below `input_dir`.
    ///
    /// Any entry that cannot be read aborts the whole walk; nothing is skipped silently.
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting files from directory: {}", input_dir.display());

        let mut files = Vec::new();

        for entry in WalkDir::new(input_dir) {
            let entry = entry.map_err(|source| ConvertError::Scan {
                root: input_dir.to_path_buf(),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            if file_utils::has_extension(entry.path(), &self.extension) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.into_path());
            }
        }

        debug!("Collected {} files for processing", files.len());
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    #[test]
    fn test_collects_nested_css_only() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let root = dir.path();
        fs::create_dir_all(root.join("a/b/c"))?;
        fs::create_dir_all(root.join("theme.css"))?;

        let expected: HashSet<PathBuf> = ["top.css", "a/one.css", "a/b/c/deep.css"]
            .iter()
            .map(|p| root.join(p))
            .collect();
        for path in &expected {
            fs::write(path, "body { margin: 0; }")?;
        }
        for other in ["readme.md", "a/site.scss", "a/b/LOUD.CSS", "a/b/c/app.css.map"] {
            fs::write(root.join(other), "")?;
        }

        let found: HashSet<PathBuf> = FileCollector::new().collect_files(root)?.into_iter().collect();
        assert_eq!(found, expected);
        Ok(())
    }

    #[test]
    fn test_empty_directory_yields_nothing() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(FileCollector::new().collect_files(dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_root_is_scan_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = FileCollector::new().collect_files(&missing).unwrap_err();
        match err {
            ConvertError::Scan { root, .. } => assert_eq!(root, missing),
            other => panic!("expected scan error, got {other:?}"),
        }
    }
}
