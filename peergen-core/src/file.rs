use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for documents that end up as a file on disk
pub trait GeneratedFile {
    /// Get the file path relative to the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file below `base` according to its rules
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content, nothing was touched
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() {
            if self.rules.overwrite == Overwrite::IfMissing {
                tracing::debug!(path = %self.path.display(), "keeping existing file");
                return Ok(WriteResult::Skipped);
            }
            if std::fs::read_to_string(&self.path).is_ok_and(|old| old == self.content) {
                return Ok(WriteResult::Unchanged);
            }
        }

        write_file(&self.path, &self.content)?;
        tracing::info!(path = %self.path.display(), "wrote file");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated documents)
    #[default]
    Always,
    /// Only create if the file doesn't exist (exported templates)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note(&'static str);

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("notes").join("note.txt")
        }

        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_same_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.txt");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "should not write")
            .with_rules(FileRules {
                overwrite: Overwrite::IfMissing,
            })
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.txt");

        let result = File::new(&path, "new content")
            .with_rules(FileRules {
                overwrite: Overwrite::IfMissing,
            })
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let result = Note("hello").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("notes/note.txt")).unwrap();
        assert_eq!(written, "hello");
    }
}
