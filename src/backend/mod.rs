//! Stringgen Backend
//!
//! This module turns validated strings tables into Swift source.
//!
//! ## Module Organization
//!
//! - `ir/` - Typed Swift declaration tree
//!   - `decl.rs`, `stmt.rs`, `expr.rs`, `types.rs` - tree nodes
//!   - `lower/` - model validation and member synthesis
//!   - `codegen.rs` - `StringsCodegen` facade (assemble + print)
//!
//! Rendering the tree to text lives in [`crate::format`].

pub mod ir;

pub use ir::lower::{assemble, validate, validate_catalog, ModelError};
pub use ir::{CodegenOptions, GenerationError, StringsCodegen};
