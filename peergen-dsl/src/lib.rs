// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parser for the peergen interface DSL.
//!
//! An interface file is a list of lines. Each line is a comment (`//`),
//! a property declaration:
//!
//! ```text
//! Q_PROPERTY(int score READ score WRITE setScore NOTIFY scoreChanged)
//! ```
//!
//! or a remote method declaration:
//!
//! ```text
//! int getRandomNumber();
//! void sendMessage(QString username, QString message);
//! ```
//!
//! Lines that match neither shape are skipped, never rejected; they are kept
//! as [`SkippedLine`] entries so tooling can report them.

mod decl;
mod error;
mod params;
mod parse;
mod source;

pub use decl::{Declaration, MethodDecl, Param, PropertyDecl};
pub use error::{Error, Result};
pub use params::{base_type, parse_params, split_params, value_type};
pub use parse::{COMMENT_MARKER, PROPERTY_KEYWORD, Parsed, SkipReason, SkippedLine, parse_str};
pub use source::InterfaceSource;
