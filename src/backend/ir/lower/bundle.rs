//! Bundle resolution synthesis.
//!
//! Package builds get `Bundle.module` from SwiftPM. Every other build (Xcode targets, frameworks) finds the
//! bundle that contains a private nested class. Both halves are keyed on the same flag:
//!
//! ```swift
//! #if !SWIFT_PACKAGE
//! private class BundleLocator {
//! }
//! #endif
//!
//! var bundle: Bundle {
//!     #if SWIFT_PACKAGE
//!     return .module
//!     #else
//!     return Bundle(for: BundleLocator.self)
//!     #endif
//! }
//! ```

use stringgen_core::lang::{build_flags, runtime};

use super::super::decl::{
    BuildCondition, ClassDecl, Decl, DeclKind, IfConfig, MemberItem, PropertyBody, PropertyDecl,
};
use super::super::expr::{CallArg, Expr};
use super::super::stmt::Stmt;
use super::super::SwiftType;
use crate::model::AccessLevel;

/// `#if !SWIFT_PACKAGE private class BundleLocator {} #endif`
pub fn synthesize_bundle_locator() -> MemberItem {
    let locator = Decl::new(DeclKind::Class(ClassDecl {
        name: runtime::BUNDLE_LOCATOR.to_string(),
        members: Vec::new(),
    }))
    .with_access(AccessLevel::Private);

    MemberItem::IncludedIf(IfConfig::new(
        BuildCondition::not_flag(build_flags::SWIFT_PACKAGE),
        vec![locator],
    ))
}

/// The computed `bundle` accessor used by every lookup in the table.
pub fn synthesize_bundle_property(access: AccessLevel) -> Decl {
    let package_bundle = Stmt::Return(Expr::implicit_member(runtime::MODULE_BUNDLE));
    let located_bundle = Stmt::Return(Expr::call(
        Expr::Type(SwiftType::named(runtime::BUNDLE_TYPE)),
        vec![CallArg::labeled(
            runtime::BUNDLE_FOR_CLASS_LABEL,
            Expr::member(Expr::Type(SwiftType::named(runtime::BUNDLE_LOCATOR)), "self"),
        )],
    ));

    let body = vec![Stmt::IfConfig(
        IfConfig::new(BuildCondition::flag(build_flags::SWIFT_PACKAGE), vec![package_bundle])
            .with_else(vec![located_bundle]),
    )];

    Decl::new(DeclKind::Property(PropertyDecl {
        name: runtime::BUNDLE_PROPERTY.to_string(),
        ty: SwiftType::named(runtime::BUNDLE_TYPE),
        body: PropertyBody::Computed(body),
    }))
    .with_access(access)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_only_outside_packages() {
        let MemberItem::IncludedIf(block) = synthesize_bundle_locator() else {
            panic!("locator must be conditional");
        };
        assert_eq!(block.condition.to_string(), "!SWIFT_PACKAGE");
        assert!(block.else_items.is_empty());
        assert_eq!(block.then_items.len(), 1);
        assert_eq!(block.then_items[0].name(), "BundleLocator");
        assert_eq!(block.then_items[0].access, AccessLevel::Private);
    }

    #[test]
    fn test_bundle_property_branches_on_package_flag() {
        let decl = synthesize_bundle_property(AccessLevel::Internal);
        assert_eq!(decl.name(), "bundle");
        assert_eq!(decl.access, AccessLevel::Internal);

        let DeclKind::Property(PropertyDecl {
            body: PropertyBody::Computed(body),
            ..
        }) = &decl.kind
        else {
            panic!("expected computed property");
        };
        let [Stmt::IfConfig(block)] = body.as_slice() else {
            panic!("expected a single #if block");
        };
        assert_eq!(block.condition, BuildCondition::flag("SWIFT_PACKAGE"));
        assert_eq!(block.then_items, [Stmt::Return(Expr::implicit_member("module"))]);
        assert_eq!(block.else_items.len(), 1);
    }
}
