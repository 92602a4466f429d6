//! Expression nodes of the output tree

use super::SwiftType;

/// A Swift expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a declaration by name (`bundle`, `name`)
    Ident(String),
    /// `self`
    SelfRef,
    /// A type used in expression position (`Bundle`, `String.LocalizationValue`)
    Type(SwiftType),
    /// Member access; `base: None` is an implicit member (`.module`, `.object`)
    Member { base: Option<Box<Expr>>, name: String },
    /// Function reference spelled with argument labels (`String.LocalizationValue.init(stringInterpolation:)`)
    FunctionRef {
        base: Box<Expr>,
        name: String,
        labels: Vec<String>,
    },
    /// `"..."`
    StringLiteral(String),
    /// Integer literal
    IntLiteral(i64),
    /// `[a, b, c]`
    Array(Vec<Expr>),
    /// `callee(label: value, ...)`
    Call { callee: Box<Expr>, args: Vec<CallArg> },
    /// `lhs op rhs`
    Infix {
        lhs: Box<Expr>,
        op: InfixOp,
        rhs: Box<Expr>,
    },
}

/// Binary operators used by synthesized bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    Add,
}

impl InfixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            InfixOp::Add => "+",
        }
    }
}

/// An argument in a call expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArg {
    pub label: Option<String>,
    pub value: Expr,
}

impl CallArg {
    pub fn labeled(label: impl Into<String>, value: Expr) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    pub fn unlabeled(value: Expr) -> Self {
        Self { label: None, value }
    }
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral(value.into())
    }

    /// `base.name`
    pub fn member(base: Expr, name: impl Into<String>) -> Self {
        Expr::Member {
            base: Some(Box::new(base)),
            name: name.into(),
        }
    }

    /// `.name`
    pub fn implicit_member(name: impl Into<String>) -> Self {
        Expr::Member {
            base: None,
            name: name.into(),
        }
    }

    /// `self.name`
    pub fn self_member(name: impl Into<String>) -> Self {
        Expr::member(Expr::SelfRef, name)
    }

    /// `lhs + rhs`
    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Expr::Infix {
            lhs: Box::new(lhs),
            op: InfixOp::Add,
            rhs: Box::new(rhs),
        }
    }

    pub fn call(callee: Expr, args: Vec<CallArg>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }
}

/// A pattern in a `switch` case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// `.case(let a, let b)`; no bindings renders `.case`
    EnumCase { case_name: String, bindings: Vec<String> },
}
