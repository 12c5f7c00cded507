//! Core utilities and types for the peergen interface generator.
//!
//! This crate provides the file-writing rules and text helpers shared by
//! the DSL parser, the code generator and the CLI.

mod file;
mod text;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Text utilities
pub use text::{indent, substitute, to_pascal_case, trim_trailing_newlines};
