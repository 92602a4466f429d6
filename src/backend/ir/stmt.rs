//! Statement nodes of the output tree

use super::decl::IfConfig;
use super::expr::{Expr, Pattern};

/// A Swift statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Expression statement; the last one of a single-expression body is its implicit value
    Expr(Expr),

    /// `let name = value` / `var name = value`
    Binding {
        mutability: Mutability,
        name: String,
        value: Expr,
    },

    /// `target = value`
    Assign { target: Expr, value: Expr },

    /// `return value`
    Return(Expr),

    /// `for binding in iterable { body }`
    For {
        binding: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },

    /// `switch subject { case ...: body }`
    Switch { subject: Expr, cases: Vec<SwitchCase> },

    /// `#if condition ... #else ... #endif` inside a body
    IfConfig(IfConfig<Stmt>),
}

/// `let` vs `var`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mutability {
    #[default]
    Immutable,
    Mutable,
}

impl Mutability {
    pub fn keyword(self) -> &'static str {
        match self {
            Mutability::Immutable => "let",
            Mutability::Mutable => "var",
        }
    }
}

/// One `case` of a switch statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCase {
    pub pattern: Pattern,
    pub body: Vec<Stmt>,
}
