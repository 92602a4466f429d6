//! Typed output tree
//!
//! This module defines the Swift declaration tree produced by the synthesizers. The tree is:
//!
//! - **Typed**: declarations, statements, expressions and types are tagged variants, so a block can't be
//!   left unbalanced and a modifier can't land on the wrong node
//! - **Unevaluated**: `#if` blocks and `@available` gates are recorded as nodes, never resolved here
//! - **Text-free**: rendering lives in [`crate::format`]
//!
//! ## Pipeline
//!
//! ```text
//! StringsTable → lower (synthesizers) → Decl tree → SwiftPrinter → Swift source
//! ```

pub mod codegen;
pub mod decl;
pub mod expr;
pub mod lower;
pub mod stmt;
pub mod types;

pub use codegen::{CodegenOptions, GenerationError, StringsCodegen};
pub use decl::{
    Availability, BuildCondition, ClassDecl, Decl, DeclKind, EnumCaseDecl, EnumDecl, ExtensionDecl, FunctionDecl,
    IfConfig, InitializerDecl, MemberItem, Param, PropertyBody, PropertyDecl, StructDecl, expression_body,
};
pub use expr::{CallArg, Expr, InfixOp, Pattern};
pub use stmt::{Mutability, Stmt, SwitchCase};
pub use types::{SwiftType, TypeParseError};

/// A generated Swift source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Leading `//` comment lines
    pub header_comment: Vec<String>,
    /// Imported modules, in order
    pub imports: Vec<String>,
    /// Top-level declarations
    pub items: Vec<Decl>,
}
