//! Accessor synthesis.
//!
//! Each key becomes one member whose shape depends on arity:
//!
//! ```text
//! greeting       →  var greeting: String {
//!                       localizedString(key: "greeting", arguments: [], bundle: bundle)
//!                   }
//! welcome(name)  →  func welcome(name: String) -> String {
//!                       localizedString(key: "welcome", arguments: [.object(name)], bundle: bundle)
//!                   }
//! ```
//!
//! Generating one member per arity gives every call site compile-time argument checking.

use stringgen_core::lang::runtime;

use super::super::decl::{expression_body, Decl, DeclKind, FunctionDecl, Param, PropertyBody, PropertyDecl};
use super::super::expr::{CallArg, Expr};
use super::super::SwiftType;
use crate::model::{AccessLevel, Accessor};

/// The two member shapes an accessor can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorShape {
    /// Read-only computed property, no parameters
    Plain,
    /// Function with one parameter per argument
    Callable(Vec<Param>),
}

impl AccessorShape {
    /// Select the shape from the accessor's arity flag
    pub fn of(accessor: &Accessor) -> Self {
        if accessor.has_arguments() {
            AccessorShape::Callable(
                accessor
                    .arguments
                    .iter()
                    .map(|arg| Param {
                        name: arg.name.clone(),
                        ty: arg.ty.clone(),
                    })
                    .collect(),
            )
        } else {
            AccessorShape::Plain
        }
    }
}

/// Build the member declaration for one accessor.
pub fn synthesize_accessor(accessor: &Accessor, access: AccessLevel) -> Decl {
    let body = expression_body(lookup_call(accessor));
    let return_type = SwiftType::named("String");

    let kind = match AccessorShape::of(accessor) {
        AccessorShape::Plain => DeclKind::Property(PropertyDecl {
            name: accessor.name.clone(),
            ty: return_type,
            body: PropertyBody::Computed(body),
        }),
        AccessorShape::Callable(params) => DeclKind::Function(FunctionDecl {
            name: accessor.name.clone(),
            params,
            return_type: Some(return_type),
            body,
        }),
    };

    tracing::debug!(accessor = %accessor.name, arguments = accessor.arguments.len(), "synthesized accessor");

    Decl::new(kind)
        .with_doc(accessor.documentation.as_deref())
        .with_access(access)
}

/// `localizedString(key: "<key>", arguments: [.case(arg), ...], bundle: bundle)`
fn lookup_call(accessor: &Accessor) -> Expr {
    let wrapped: Vec<Expr> = accessor
        .arguments
        .iter()
        .map(|arg| {
            Expr::call(
                Expr::implicit_member(arg.case_name.clone()),
                vec![CallArg::unlabeled(Expr::ident(arg.name.clone()))],
            )
        })
        .collect();

    let [key_label, arguments_label, bundle_label] = runtime::LOOKUP_LABELS;
    Expr::call(
        Expr::ident(runtime::LOOKUP_FUNCTION),
        vec![
            CallArg::labeled(key_label, Expr::string(accessor.key.clone())),
            CallArg::labeled(arguments_label, Expr::Array(wrapped)),
            CallArg::labeled(bundle_label, Expr::ident(runtime::BUNDLE_PROPERTY)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ir::Stmt;
    use crate::model::Argument;

    fn lookup_args(decl: &Decl) -> &[CallArg] {
        let body = match &decl.kind {
            DeclKind::Property(PropertyDecl {
                body: PropertyBody::Computed(body),
                ..
            }) => body,
            DeclKind::Function(f) => &f.body,
            other => panic!("unexpected accessor kind {:?}", other),
        };
        match body.as_slice() {
            [Stmt::Expr(Expr::Call { args, .. })] => args,
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_plain_accessor_is_property() {
        let decl = synthesize_accessor(
            &Accessor::new("greeting", "greeting").with_documentation("Says hello"),
            AccessLevel::Public,
        );
        assert_eq!(decl.doc.as_deref(), Some("Says hello"));
        assert_eq!(decl.access, AccessLevel::Public);
        assert!(matches!(&decl.kind, DeclKind::Property(p) if p.name == "greeting" && !p.is_stored()));
        assert_eq!(lookup_args(&decl)[1].value, Expr::Array(vec![]));
    }

    #[test]
    fn test_callable_accessor_keeps_argument_order() {
        let accessor = Accessor::new("transfer", "transfer.summary")
            .with_argument(Argument::new("amount", SwiftType::named("Double"), "double"))
            .with_argument(Argument::new("recipient", SwiftType::named("String"), "object"));
        let decl = synthesize_accessor(&accessor, AccessLevel::Default);

        let DeclKind::Function(f) = &decl.kind else {
            panic!("expected function");
        };
        let params: Vec<String> = f.params.iter().map(|p| format!("{}: {}", p.name, p.ty)).collect();
        assert_eq!(params, ["amount: Double", "recipient: String"]);
        assert_eq!(decl.doc, None);

        let args = lookup_args(&decl);
        assert_eq!(args[0].value, Expr::string("transfer.summary"));
        assert_eq!(
            args[1].value,
            Expr::Array(vec![
                Expr::call(Expr::implicit_member("double"), vec![CallArg::unlabeled(Expr::ident("amount"))]),
                Expr::call(Expr::implicit_member("object"), vec![CallArg::unlabeled(Expr::ident("recipient"))]),
            ])
        );
        assert_eq!(args[2].value, Expr::ident("bundle"));
    }
}
