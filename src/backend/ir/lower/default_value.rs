//! Default value synthesis.
//!
//! Builds the `String.LocalizationValue` form of a table instance by interpolating its stored state. The
//! member only exists on platforms that ship the localized value API, so it is always gated:
//!
//! ```swift
//! @available(macOS 12, iOS 15, tvOS 15, watchOS 8, *)
//! fileprivate var defaultValue: String.LocalizationValue { ... }
//! ```
//!
//! Stored properties of type `[Argument]` are expanded case by case; every other stored property is
//! interpolated directly. Stored values are always read through `self.` so the body's locals never shadow
//! them.

use stringgen_core::lang::platforms::LOCALIZED_VALUE_MINIMUMS;
use stringgen_core::lang::runtime;

use super::super::decl::{Availability, Decl, DeclKind, PropertyBody, PropertyDecl};
use super::super::expr::{CallArg, Expr, Pattern};
use super::super::stmt::{Mutability, Stmt, SwitchCase};
use super::super::SwiftType;
use crate::model::{AccessLevel, ArgumentEnum, StoredProperty};

const INTERPOLATION: &str = "stringInterpolation";
const MAKE_DEFAULT_VALUE: &str = "makeDefaultValue";
const LOOP_BINDING: &str = "argument";
const CASE_BINDING: &str = "value";

/// `String.LocalizationValue`
pub fn localization_value_type() -> SwiftType {
    SwiftType::member(SwiftType::named("String"), "LocalizationValue")
}

/// Build the gated `defaultValue` accessor.
pub fn synthesize_default_value(stored_properties: &[StoredProperty], argument_enum: Option<&ArgumentEnum>) -> Decl {
    let mut body = vec![Stmt::Binding {
        mutability: Mutability::Mutable,
        name: INTERPOLATION.to_string(),
        value: Expr::call(
            Expr::Type(SwiftType::member(localization_value_type(), "StringInterpolation")),
            vec![
                CallArg::labeled("literalCapacity", Expr::IntLiteral(0)),
                CallArg::labeled("interpolationCount", interpolation_count(stored_properties, argument_enum)),
            ],
        ),
    }];

    for property in stored_properties {
        match argument_enum.filter(|e| property.ty.is_array_of(&e.name)) {
            Some(argument_enum) => body.push(expand_arguments(&property.name, argument_enum)),
            None => body.push(append_interpolation(Expr::self_member(property.name.clone()))),
        }
    }

    body.push(Stmt::Binding {
        mutability: Mutability::Immutable,
        name: MAKE_DEFAULT_VALUE.to_string(),
        value: Expr::FunctionRef {
            base: Box::new(Expr::Type(localization_value_type())),
            name: "init".to_string(),
            labels: vec![INTERPOLATION.to_string()],
        },
    });
    body.push(Stmt::Return(Expr::call(
        Expr::ident(MAKE_DEFAULT_VALUE),
        vec![CallArg::unlabeled(Expr::ident(INTERPOLATION))],
    )));

    Decl::new(DeclKind::Property(PropertyDecl {
        name: runtime::DEFAULT_VALUE_PROPERTY.to_string(),
        ty: localization_value_type(),
        body: PropertyBody::Computed(body),
    }))
    .with_access(AccessLevel::Fileprivate)
    .with_availability(Availability::Gated(LOCALIZED_VALUE_MINIMUMS.to_vec()))
}

/// Number of interpolated values: one per plain property plus the length of every argument list.
fn interpolation_count(stored_properties: &[StoredProperty], argument_enum: Option<&ArgumentEnum>) -> Expr {
    let (lists, plain): (Vec<&StoredProperty>, Vec<&StoredProperty>) = stored_properties
        .iter()
        .partition(|p| argument_enum.is_some_and(|e| p.ty.is_array_of(&e.name)));

    let mut terms: Vec<Expr> = Vec::new();
    if !plain.is_empty() || lists.is_empty() {
        terms.push(Expr::IntLiteral(plain.len() as i64));
    }
    terms.extend(
        lists
            .iter()
            .map(|p| Expr::member(Expr::self_member(p.name.clone()), "count")),
    );

    let mut terms = terms.into_iter();
    let first = terms.next().unwrap_or(Expr::IntLiteral(0));
    terms.fold(first, Expr::add)
}

/// `for argument in self.<list> { switch argument { case .<case>(let value): ... } }`
fn expand_arguments(list: &str, argument_enum: &ArgumentEnum) -> Stmt {
    let cases = argument_enum
        .cases
        .iter()
        .map(|case| SwitchCase {
            pattern: Pattern::EnumCase {
                case_name: case.name.clone(),
                bindings: vec![CASE_BINDING.to_string()],
            },
            body: vec![append_interpolation(Expr::ident(CASE_BINDING))],
        })
        .collect();

    Stmt::For {
        binding: LOOP_BINDING.to_string(),
        iterable: Expr::self_member(list),
        body: vec![Stmt::Switch {
            subject: Expr::ident(LOOP_BINDING),
            cases,
        }],
    }
}

/// `stringInterpolation.appendInterpolation(<value>)`
fn append_interpolation(value: Expr) -> Stmt {
    Stmt::Expr(Expr::call(
        Expr::member(Expr::ident(INTERPOLATION), "appendInterpolation"),
        vec![CallArg::unlabeled(value)],
    ))
}
