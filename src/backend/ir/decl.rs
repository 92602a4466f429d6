//! Declaration nodes of the output tree

use std::fmt;

use stringgen_core::lang::platforms::{self, Minimum};

use super::{Expr, Stmt, SwiftType};
use crate::model::AccessLevel;

/// A Swift declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    /// Leading `///` documentation; `None` emits nothing
    pub doc: Option<String>,
    pub availability: Availability,
    pub access: AccessLevel,
    pub kind: DeclKind,
}

impl Decl {
    pub fn new(kind: DeclKind) -> Self {
        Self {
            doc: None,
            availability: Availability::Unconditional,
            access: AccessLevel::Default,
            kind,
        }
    }

    /// Attach documentation; blank text is treated as absent
    pub fn with_doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.filter(|d| !d.trim().is_empty()).map(str::to_string);
        self
    }

    pub fn with_access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Declared name (initializers are named `init`)
    pub fn name(&self) -> &str {
        match &self.kind {
            DeclKind::Struct(s) => &s.name,
            DeclKind::Class(c) => &c.name,
            DeclKind::Enum(e) => &e.name,
            DeclKind::Property(p) => &p.name,
            DeclKind::Initializer(_) => "init",
            DeclKind::Function(f) => &f.name,
            DeclKind::Extension(e) => &e.extended,
        }
    }
}

/// Declaration kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Struct(StructDecl),
    Class(ClassDecl),
    Enum(EnumDecl),
    Property(PropertyDecl),
    Initializer(InitializerDecl),
    Function(FunctionDecl),
    Extension(ExtensionDecl),
}

/// `struct Name: Conformances { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    pub conformances: Vec<String>,
    pub members: Vec<MemberItem>,
}

/// `class Name { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub members: Vec<MemberItem>,
}

/// `enum Name: Conformances { case ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: String,
    pub conformances: Vec<String>,
    pub cases: Vec<EnumCaseDecl>,
}

/// `case name(Associated, ...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCaseDecl {
    pub name: String,
    pub associated: Vec<SwiftType>,
}

/// Stored (`let name: Type`) or computed (`var name: Type { body }`) property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: SwiftType,
    pub body: PropertyBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyBody {
    /// `let name: Type`
    Stored,
    /// `var name: Type { statements }`
    Computed(Vec<Stmt>),
}

impl PropertyDecl {
    pub fn is_stored(&self) -> bool {
        matches!(self.body, PropertyBody::Stored)
    }
}

/// `init(params) { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerDecl {
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

/// `func name(params) -> ReturnType { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Option<SwiftType>,
    pub body: Vec<Stmt>,
}

/// A function or initializer parameter; the name doubles as the argument label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: SwiftType,
}

/// `extension Type { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDecl {
    pub extended: String,
    pub members: Vec<MemberItem>,
}

/// An entry of a member block: either always present or included under a build condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberItem {
    Always(Decl),
    IncludedIf(IfConfig<Decl>),
}

impl MemberItem {
    /// The unconditional declaration, if any
    pub fn as_decl(&self) -> Option<&Decl> {
        match self {
            MemberItem::Always(decl) => Some(decl),
            MemberItem::IncludedIf(_) => None,
        }
    }
}

/// `#if condition then_items #else else_items #endif`
///
/// The condition is resolved by the Swift compiler, never evaluated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfConfig<T> {
    pub condition: BuildCondition,
    pub then_items: Vec<T>,
    pub else_items: Vec<T>,
}

impl<T> IfConfig<T> {
    pub fn new(condition: BuildCondition, then_items: Vec<T>) -> Self {
        Self {
            condition,
            then_items,
            else_items: Vec::new(),
        }
    }

    pub fn with_else(mut self, else_items: Vec<T>) -> Self {
        self.else_items = else_items;
        self
    }
}

/// Build-configuration predicate of an `#if` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildCondition {
    Flag(String),
    Not(Box<BuildCondition>),
}

impl BuildCondition {
    pub fn flag(name: impl Into<String>) -> Self {
        BuildCondition::Flag(name.into())
    }

    pub fn not_flag(name: impl Into<String>) -> Self {
        BuildCondition::Not(Box::new(BuildCondition::flag(name)))
    }
}

impl fmt::Display for BuildCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildCondition::Flag(name) => write!(f, "{}", name),
            BuildCondition::Not(inner) => write!(f, "!{}", inner),
        }
    }
}

/// Whether a declaration carries an `@available` gate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Unconditional,
    /// `@available(platform version, ..., *)`
    Gated(Vec<Minimum>),
}

impl Availability {
    /// The attribute argument list, e.g. `macOS 12, iOS 15, *`
    pub fn arguments(&self) -> Option<String> {
        match self {
            Availability::Unconditional => None,
            Availability::Gated(minimums) => {
                let mut parts: Vec<String> = minimums
                    .iter()
                    .map(|m| format!("{} {}", platforms::as_str(m.platform), m.major))
                    .collect();
                parts.push("*".to_string());
                Some(parts.join(", "))
            }
        }
    }
}

/// A body that is a single expression, used by most synthesized accessors
pub fn expression_body(expr: Expr) -> Vec<Stmt> {
    vec![Stmt::Expr(expr)]
}
