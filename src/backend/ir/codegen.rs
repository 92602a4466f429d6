//! Code generation facade
//!
//! This module provides `StringsCodegen`, a unified API for generating Swift from strings tables:
//!
//! ```text
//! StringsTable → assemble (validate + synthesize) → Decl → SwiftPrinter → Swift source
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stringgen::backend::StringsCodegen;
//! use stringgen::model::{Accessor, StringsTable};
//!
//! let table = StringsTable::new("Localizable").with_accessor(Accessor::new("greeting", "greeting"));
//! let swift = StringsCodegen::new().try_generate(&table)?;
//! assert!(swift.starts_with("struct Localizable: Sendable {"));
//! # Ok::<(), stringgen::backend::GenerationError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every entry point returns `Result<_, GenerationError>`. A table that breaks a model invariant produces
//! no output at all, not even for the tables before it in a catalog.

use miette::Diagnostic;
use stringgen_core::lang::runtime;
use thiserror::Error;

use super::lower::{assemble, validate_catalog, ModelError};
use super::{Decl, DeclKind, ExtensionDecl, MemberItem, SourceFile};
use crate::format::{FormatConfig, SwiftPrinter};
use crate::model::{parse_document, StringsTable};

/// Error during Swift code generation
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    /// A table broke a model invariant
    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),
    /// The model document could not be parsed
    #[error("invalid model document: {0}")]
    #[diagnostic(code(stringgen::input), help("expected a table object or {{ \"tables\": [...] }}"))]
    Input(#[from] serde_json::Error),
}

/// Options controlling the generated output
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Wrap tables in a source file (`import Foundation` + `extension String { ... }`)
    pub wrap_in_source_file: bool,
    /// `//` lines at the top of a wrapped source file
    pub header_comment: Vec<String>,
    pub format: FormatConfig,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            wrap_in_source_file: true,
            header_comment: vec!["This file is generated by stringgen. Do not edit.".to_string()],
            format: FormatConfig::default(),
        }
    }
}

impl CodegenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_file(mut self, enabled: bool) -> Self {
        self.wrap_in_source_file = enabled;
        self
    }

    pub fn with_header_comment(mut self, lines: Vec<String>) -> Self {
        self.header_comment = lines;
        self
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }
}

/// Swift code generator for strings tables
#[derive(Debug, Clone, Default)]
pub struct StringsCodegen {
    options: CodegenOptions,
}

impl StringsCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodegenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    fn printer(&self) -> SwiftPrinter {
        SwiftPrinter::new(self.options.format.clone())
    }

    /// Generate the bare declaration for one table
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Model`] when the table breaks an invariant.
    #[tracing::instrument(skip_all, fields(table = %table.type_name))]
    pub fn try_generate(&self, table: &StringsTable) -> Result<String, GenerationError> {
        let decl = assemble(table)?;
        Ok(self.printer().print_decl(&decl))
    }

    /// Assemble every table, failing on the first invalid one
    ///
    /// Type names are checked across the catalog first, since all tables land in one scope.
    pub fn assemble_all(&self, tables: &[StringsTable]) -> Result<Vec<Decl>, GenerationError> {
        validate_catalog(tables)?;
        tables
            .iter()
            .map(|table| assemble(table).map_err(GenerationError::from))
            .collect()
    }

    /// Generate output for several tables
    ///
    /// With `wrap_in_source_file` the tables are nested in one `extension String`; otherwise the bare
    /// declarations are printed one after another, separated by a blank line.
    #[tracing::instrument(skip_all, fields(table_count = tables.len()))]
    pub fn generate_all(&self, tables: &[StringsTable]) -> Result<String, GenerationError> {
        if self.options.wrap_in_source_file {
            return self.generate_source_file(tables);
        }
        let decls = self.assemble_all(tables)?;
        let printer = self.printer();
        Ok(decls
            .iter()
            .map(|decl| printer.print_decl(decl))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Generate a complete source file: header comment, `import Foundation`, and every table nested in
    /// `extension String`
    pub fn generate_source_file(&self, tables: &[StringsTable]) -> Result<String, GenerationError> {
        let decls = self.assemble_all(tables)?;
        Ok(self.printer().print_source_file(&self.source_file(decls)))
    }

    /// Parse a JSON model document and generate output for every table in it
    pub fn from_json(&self, json: &str) -> Result<String, GenerationError> {
        let tables = parse_document(json)?;
        tracing::debug!(table_count = tables.len(), "parsed model document");
        self.generate_all(&tables)
    }

    /// Wrap assembled tables in a source file
    pub fn source_file(&self, decls: Vec<Decl>) -> SourceFile {
        let extension = Decl::new(DeclKind::Extension(ExtensionDecl {
            extended: "String".to_string(),
            members: decls.into_iter().map(MemberItem::Always).collect(),
        }));
        SourceFile {
            header_comment: self.options.header_comment.clone(),
            imports: vec![runtime::FOUNDATION.to_string()],
            items: vec![extension],
        }
    }
}
