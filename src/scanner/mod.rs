use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{IrLintError, Result};

/// Extension allowlist plus glob-based excludes.
pub struct GlobFilter {
    extensions: Vec<String>,
    exclude: GlobSet,
}

impl GlobFilter {
    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| IrLintError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|e| IrLintError::Config(format!("Failed to compile exclude patterns: {e}")))?;

        Ok(Self {
            extensions,
            exclude,
        })
    }

    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        if self.exclude.is_match(path) {
            return false;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// Recursive walk collecting the files the filter accepts, sorted for
/// deterministic output. A path that is itself a file is taken as-is: the
/// caller named it deliberately.
pub struct DirectoryScanner {
    filter: GlobFilter,
}

impl DirectoryScanner {
    #[must_use]
    pub const fn new(filter: GlobFilter) -> Self {
        Self { filter }
    }

    /// # Errors
    /// Returns an error if `root` does not exist.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(IrLintError::Config(format!(
                "Path not found: {}",
                root.display()
            )));
        }
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file() && self.filter.matches(entry.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
