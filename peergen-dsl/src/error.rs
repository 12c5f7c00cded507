use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for DSL operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(peergen::io),
        help("pass the path of an interface file, e.g. 'peergen generate client.peer'")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} is not a declaration")]
    #[diagnostic(code(peergen::malformed_line), help("{help}"))]
    MalformedLine {
        #[source_code]
        src: NamedSource<String>,
        #[label("{label}")]
        span: SourceSpan,
        line: usize,
        label: String,
        help: String,
    },
}

impl Error {
    /// Create a malformed line error with source context
    pub fn malformed_line(
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
        line: usize,
        label: impl Into<String>,
        help: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::MalformedLine {
            src: NamedSource::new(filename, src.to_string()),
            span: span.into(),
            line,
            label: label.into(),
            help: help.into(),
        })
    }
}
