//! Swift source printer
//!
//! Renders the declaration tree built by [`crate::backend::ir::lower`] as Swift text:
//! - 4-space indentation
//! - one blank line between member groups (consecutive stored properties stay together)
//! - initializer parameters one per line
//!
//! The printer is swappable: anything that walks [`crate::backend::ir::Decl`] can replace it.

mod config;
mod printer;
mod writer;

pub use config::FormatConfig;
pub use printer::{string_literal, SwiftPrinter};
pub use writer::FormatWriter;

use crate::backend::ir::Decl;

/// Print a declaration with default settings
pub fn print_decl(decl: &Decl) -> String {
    SwiftPrinter::default().print_decl(decl)
}

/// Print a declaration with custom configuration
pub fn print_decl_with_config(decl: &Decl, config: FormatConfig) -> String {
    SwiftPrinter::new(config).print_decl(decl)
}
