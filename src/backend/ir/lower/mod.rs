//! Strings table to declaration tree lowering.
//!
//! This module turns a validated [`crate::model::StringsTable`] into the typed Swift tree. Each concern has
//! its own synthesizer; [`assemble`] is the only public entry point that composes them.
//!
//! # Architecture
//!
//! - `errors` - [`ModelError`]
//! - `validate` - model invariant checks, run before anything is built
//! - `argument` - argument carrier enum
//! - `accessor` - plain and callable accessors
//! - `bundle` - bundle locator block and `bundle` accessor
//! - `default_value` - availability-gated `defaultValue`
//! - `table` - the assembler
//!
//! # Usage
//!
//! ```rust
//! use stringgen::backend::ir::lower::assemble;
//! use stringgen::model::{Accessor, StringsTable};
//!
//! let table = StringsTable::new("Localizable").with_accessor(Accessor::new("greeting", "greeting"));
//! let decl = assemble(&table)?;
//! assert_eq!(decl.name(), "Localizable");
//! # Ok::<(), stringgen::backend::ir::lower::ModelError>(())
//! ```

mod accessor;
mod argument;
mod bundle;
mod default_value;
mod errors;
mod table;
mod validate;

pub use accessor::{synthesize_accessor, AccessorShape};
pub use argument::synthesize_argument_enum;
pub use bundle::{synthesize_bundle_locator, synthesize_bundle_property};
pub use default_value::{localization_value_type, synthesize_default_value};
pub use errors::ModelError;
pub use table::assemble;
pub use validate::{validate, validate_catalog};
