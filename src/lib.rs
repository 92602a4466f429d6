#![forbid(unsafe_code)]
//! Stringgen: typed Swift accessors for localized string tables
//!
//! Each strings table (a catalog of translatable keys) becomes one Swift struct whose members resolve the
//! key against the right resource bundle. This crate provides the model, the synthesizers that build the
//! typed declaration tree, the Swift printer, and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Model defects**: A table that breaks an invariant is reported as a [`backend::ModelError`], never a panic.

pub mod backend;
pub mod cli;
pub mod format;
pub mod model;

pub use backend::{assemble, CodegenOptions, GenerationError, ModelError, StringsCodegen};
pub use format::{FormatConfig, SwiftPrinter};
pub use model::{parse_document, StringsTable};
