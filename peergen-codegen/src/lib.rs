//! Variant synthesis and document rendering for peergen.
//!
//! Turns parsed interface declarations into a peer class: every remote
//! method becomes eight invocation variants, every property a field with a
//! reader, a writer and a change notification. The result is rendered
//! through a [`TemplateStore`] into a header and an implementation file.
//!
//! # Module Organization
//!
//! - [`config`] - `peergen.toml` loading
//! - [`equality`] - Equality-support heuristic for property writers
//! - [`generator`] - Preview and write the generated documents
//! - [`interface`] - Interface model and its builder
//! - [`render`] - Header and implementation documents
//! - [`templates`] - Built-in and overridden template text
//! - [`types`] - Framework type helpers
//! - [`variant`] - Variant kinds and per-variant rendering

pub mod config;
pub mod equality;
pub mod generator;
pub mod interface;
pub mod render;
pub mod templates;
pub mod types;
pub mod variant;

pub use config::{CONFIG_FILE, GeneratorConfig, Guards};
pub use equality::{EqualityPolicy, EqualitySupport};
pub use generator::{GenerateResult, Generator, PreviewFile};
pub use interface::{Interface, InterfaceBuilder, SynthesisContext};
pub use render::{HeaderFile, SourceFile};
pub use templates::{BUILTIN_TEMPLATES, TemplateStore};
pub use variant::{MethodKind, Section, Variant, VariantKind};
