use std::path::{Path, PathBuf};

use crate::{Error, Parsed, Result, SkippedLine, parse_str};

/// An interface file with both raw content and parse result.
pub struct InterfaceSource {
    path: PathBuf,
    content: String,
    parsed: Parsed,
}

impl InterfaceSource {
    /// Open and parse an interface file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;

        Ok(Self::from_content(path, content))
    }

    /// Parse interface text that did not come from disk.
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let parsed = parse_str(&content);

        Self {
            path: path.into(),
            content,
            parsed,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parse result.
    pub fn parsed(&self) -> &Parsed {
        &self.parsed
    }

    /// File stem, used as the default interface name.
    pub fn stem(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }

    /// One diagnostic per skipped line, in file order.
    pub fn diagnostics(&self) -> Vec<Box<Error>> {
        self.parsed
            .skipped
            .iter()
            .map(|skipped| self.skipped_error(skipped))
            .collect()
    }

    /// Fail on the first skipped line.
    pub fn ensure_strict(&self) -> Result<()> {
        match self.parsed.skipped.first() {
            Some(skipped) => Err(self.skipped_error(skipped)),
            None => Ok(()),
        }
    }

    fn skipped_error(&self, skipped: &SkippedLine) -> Box<Error> {
        Error::malformed_line(
            &self.content,
            &self.path.display().to_string(),
            skipped.span.clone(),
            skipped.line,
            skipped.reason.label(),
            skipped.reason.help(),
        )
    }
}
