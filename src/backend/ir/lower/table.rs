//! Table assembly: compose every synthesizer into one struct declaration.

use stringgen_core::lang::runtime;

use super::super::decl::{
    Decl, DeclKind, InitializerDecl, MemberItem, Param, PropertyBody, PropertyDecl, StructDecl,
};
use super::super::expr::Expr;
use super::super::stmt::Stmt;
use super::accessor::synthesize_accessor;
use super::argument::synthesize_argument_enum;
use super::bundle::{synthesize_bundle_locator, synthesize_bundle_property};
use super::default_value::synthesize_default_value;
use super::{validate, ModelError};
use crate::model::{AccessLevel, StoredProperty, StringsTable};

/// Assemble the full declaration for one strings table.
///
/// The table is validated first; on success the struct's members are emitted in this fixed order:
///
/// 1. `#if !SWIFT_PACKAGE` bundle locator
/// 2. argument enum (only when the table declares one)
/// 3. stored properties
/// 4. `fileprivate` memberwise initializer
/// 5. one accessor per key, in catalog order
/// 6. `bundle`
/// 7. gated `defaultValue`
///
/// # Errors
///
/// Returns the first [`ModelError`] found by [`validate`]; nothing is built in that case.
#[tracing::instrument(skip_all, fields(table = %table.type_name, accessor_count = table.accessors.len()))]
pub fn assemble(table: &StringsTable) -> Result<Decl, ModelError> {
    validate(table)?;
    if table.argument_enum.is_some() && !table.has_argument_accessors() {
        tracing::warn!(table = %table.type_name, "argument enum declared but no accessor takes arguments");
    }

    let mut members: Vec<MemberItem> = Vec::with_capacity(table.stored_properties.len() + table.accessors.len() + 5);

    members.push(synthesize_bundle_locator());

    if let Some(argument_enum) = &table.argument_enum {
        members.push(MemberItem::Always(synthesize_argument_enum(argument_enum)));
    }

    members.extend(
        table
            .stored_properties
            .iter()
            .map(|p| MemberItem::Always(stored_property(p))),
    );

    members.push(MemberItem::Always(initializer(&table.stored_properties)));

    members.extend(
        table
            .accessors
            .iter()
            .map(|a| MemberItem::Always(synthesize_accessor(a, table.access_level))),
    );

    members.push(MemberItem::Always(synthesize_bundle_property(table.access_level)));
    members.push(MemberItem::Always(synthesize_default_value(
        &table.stored_properties,
        table.argument_enum.as_ref(),
    )));

    Ok(Decl::new(DeclKind::Struct(StructDecl {
        name: table.type_name.clone(),
        conformances: vec![runtime::SENDABLE.to_string()],
        members,
    }))
    .with_doc(table.header_documentation.as_deref())
    .with_access(table.access_level))
}

/// `let name: Type`
fn stored_property(property: &StoredProperty) -> Decl {
    Decl::new(DeclKind::Property(PropertyDecl {
        name: property.name.clone(),
        ty: property.ty.clone(),
        body: PropertyBody::Stored,
    }))
}

/// `fileprivate init(a: A, b: B) { self.a = a; self.b = b }`
///
/// Not part of the public surface: instances come from the generated code, not from callers.
fn initializer(stored_properties: &[StoredProperty]) -> Decl {
    let params = stored_properties
        .iter()
        .map(|p| Param {
            name: p.name.clone(),
            ty: p.ty.clone(),
        })
        .collect();
    let body = stored_properties
        .iter()
        .map(|p| Stmt::Assign {
            target: Expr::self_member(p.name.clone()),
            value: Expr::ident(p.name.clone()),
        })
        .collect();

    Decl::new(DeclKind::Initializer(InitializerDecl { params, body })).with_access(AccessLevel::Fileprivate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Accessor, Argument, ArgumentEnum, SwiftType};

    fn member_names(decl: &Decl) -> Vec<String> {
        let DeclKind::Struct(s) = &decl.kind else {
            panic!("expected struct");
        };
        s.members
            .iter()
            .map(|m| match m {
                MemberItem::Always(d) => d.name().to_string(),
                MemberItem::IncludedIf(block) => format!("#if {}", block.condition),
            })
            .collect()
    }

    fn localizable() -> StringsTable {
        StringsTable::new("Localizable")
            .with_header_documentation("Strings from Localizable.xcstrings")
            .with_access_level(AccessLevel::Public)
            .with_stored_property(StoredProperty::new("key", SwiftType::named("String")))
            .with_argument_enum(ArgumentEnum::standard())
            .with_accessor(Accessor::new("greeting", "greeting"))
            .with_accessor(
                Accessor::new("welcome", "welcome").with_argument(Argument::new(
                    "name",
                    SwiftType::named("String"),
                    "object",
                )),
            )
    }

    #[test]
    fn test_member_order() {
        let decl = assemble(&localizable()).unwrap();
        assert_eq!(
            member_names(&decl),
            [
                "#if !SWIFT_PACKAGE",
                "Argument",
                "key",
                "init",
                "greeting",
                "welcome",
                "bundle",
                "defaultValue"
            ]
        );
        assert_eq!(decl.access, AccessLevel::Public);
        assert_eq!(decl.doc.as_deref(), Some("Strings from Localizable.xcstrings"));
    }

    #[test]
    fn test_argument_enum_is_optional() {
        let table = StringsTable::new("Plain").with_accessor(Accessor::new("title", "title"));
        let decl = assemble(&table).unwrap();
        assert_eq!(
            member_names(&decl),
            ["#if !SWIFT_PACKAGE", "init", "title", "bundle", "defaultValue"]
        );
    }

    #[test]
    fn test_initializer_matches_stored_properties() {
        let table = StringsTable::new("Localizable")
            .with_stored_property(StoredProperty::new("key", SwiftType::named("StaticString")))
            .with_stored_property(StoredProperty::new("table", SwiftType::optional(SwiftType::named("String"))));
        let init = initializer(&table.stored_properties);
        assert_eq!(init.access, AccessLevel::Fileprivate);
        let DeclKind::Initializer(init) = &init.kind else {
            panic!("expected initializer");
        };
        let params: Vec<String> = init.params.iter().map(|p| format!("{}: {}", p.name, p.ty)).collect();
        assert_eq!(params, ["key: StaticString", "table: String?"]);
        assert_eq!(
            init.body[1],
            Stmt::Assign {
                target: Expr::self_member("table"),
                value: Expr::ident("table"),
            }
        );
    }

    #[test]
    fn test_duplicate_accessor_fails() {
        let table = localizable().with_accessor(Accessor::new("greeting", "greeting.again"));
        assert!(matches!(
            assemble(&table),
            Err(ModelError::DuplicateAccessor { name, .. }) if name == "greeting"
        ));
    }
}
