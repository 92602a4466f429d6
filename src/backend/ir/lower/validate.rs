//! Model invariant checks.
//!
//! Runs before any synthesizer so assembly is all-or-nothing: either every check passes and the full tree
//! is built, or the first violation is returned and nothing is emitted.

use std::collections::HashSet;

use stringgen_core::lang::{runtime, swift_keywords};

use super::ModelError;
use crate::model::{Accessor, ArgumentEnum, StringsTable};

/// Check every invariant of `table`, returning the first violation.
///
/// Checks run in declaration order (type name, argument enum, stored properties, accessors) so the reported
/// error is stable for a given input.
pub fn validate(table: &StringsTable) -> Result<(), ModelError> {
    let table_name = table.type_name.as_str();
    check_identifier(table_name, "type", table_name)?;

    let mut reserved: HashSet<&str> = HashSet::from([
        runtime::BUNDLE_PROPERTY,
        runtime::DEFAULT_VALUE_PROPERTY,
        runtime::BUNDLE_LOCATOR,
        runtime::LOOKUP_FUNCTION,
        table_name,
    ]);
    if let Some(argument_enum) = &table.argument_enum {
        validate_argument_enum(table_name, argument_enum)?;
        reserved.insert(argument_enum.name.as_str());
    }

    let mut stored: HashSet<&str> = HashSet::new();
    for property in &table.stored_properties {
        check_identifier(table_name, "stored property", &property.name)?;
        if reserved.contains(property.name.as_str()) {
            return Err(ModelError::ReservedName {
                table: table_name.to_string(),
                name: property.name.clone(),
            });
        }
        if !stored.insert(&property.name) {
            return Err(ModelError::DuplicateStoredProperty {
                table: table_name.to_string(),
                name: property.name.clone(),
            });
        }
    }

    let mut accessors: HashSet<&str> = HashSet::new();
    for accessor in &table.accessors {
        check_identifier(table_name, "accessor", &accessor.name)?;
        if stored.contains(accessor.name.as_str()) {
            return Err(ModelError::AccessorShadowsStoredProperty {
                table: table_name.to_string(),
                name: accessor.name.clone(),
            });
        }
        if reserved.contains(accessor.name.as_str()) {
            return Err(ModelError::ReservedName {
                table: table_name.to_string(),
                name: accessor.name.clone(),
            });
        }
        if !accessors.insert(&accessor.name) {
            return Err(ModelError::DuplicateAccessor {
                table: table_name.to_string(),
                name: accessor.name.clone(),
            });
        }
        validate_accessor(table_name, accessor, table.argument_enum.as_ref(), &reserved)?;
    }

    Ok(())
}

/// Check the invariants that span tables: every table of a catalog shares one `extension String`, so type
/// names must be unique.
pub fn validate_catalog(tables: &[StringsTable]) -> Result<(), ModelError> {
    let mut names: HashSet<&str> = HashSet::new();
    for table in tables {
        if !names.insert(&table.type_name) {
            return Err(ModelError::DuplicateTableName {
                table: table.type_name.clone(),
            });
        }
    }
    Ok(())
}

fn validate_argument_enum(table: &str, argument_enum: &ArgumentEnum) -> Result<(), ModelError> {
    check_identifier(table, "argument enum", &argument_enum.name)?;
    let mut cases: HashSet<&str> = HashSet::new();
    for case in &argument_enum.cases {
        check_identifier(table, "argument case", &case.name)?;
        if !cases.insert(&case.name) {
            return Err(ModelError::DuplicateArgumentCase {
                table: table.to_string(),
                name: case.name.clone(),
            });
        }
    }
    Ok(())
}

fn validate_accessor(
    table: &str,
    accessor: &Accessor,
    argument_enum: Option<&ArgumentEnum>,
    reserved: &HashSet<&str>,
) -> Result<(), ModelError> {
    if accessor.has_arguments() == accessor.arguments.is_empty() {
        return Err(ModelError::ArityMismatch {
            table: table.to_string(),
            accessor: accessor.name.clone(),
            declared: accessor.has_arguments(),
            count: accessor.arguments.len(),
        });
    }
    if accessor.arguments.is_empty() {
        return Ok(());
    }

    let Some(argument_enum) = argument_enum else {
        return Err(ModelError::MissingArgumentEnum {
            table: table.to_string(),
            accessor: accessor.name.clone(),
        });
    };

    let mut names: HashSet<&str> = HashSet::new();
    for argument in &accessor.arguments {
        check_identifier(table, "argument", &argument.name)?;
        // Parameters shadow members inside the accessor body, including `bundle` and the lookup function.
        if reserved.contains(argument.name.as_str()) {
            return Err(ModelError::ReservedName {
                table: table.to_string(),
                name: argument.name.clone(),
            });
        }
        if !names.insert(&argument.name) {
            return Err(ModelError::DuplicateArgument {
                table: table.to_string(),
                accessor: accessor.name.clone(),
                name: argument.name.clone(),
            });
        }
        let Some(case) = argument_enum.case(&argument.case_name) else {
            return Err(ModelError::UnknownArgumentCase {
                table: table.to_string(),
                accessor: accessor.name.clone(),
                argument: argument.name.clone(),
                case_name: argument.case_name.clone(),
            });
        };
        if case.associated_type != argument.ty {
            return Err(ModelError::ArgumentTypeMismatch {
                table: table.to_string(),
                accessor: accessor.name.clone(),
                argument: argument.name.clone(),
                case_name: case.name.clone(),
                expected: case.associated_type.to_string(),
                found: argument.ty.to_string(),
            });
        }
    }
    Ok(())
}

fn check_identifier(table: &str, kind: &'static str, name: &str) -> Result<(), ModelError> {
    if swift_keywords::is_valid_identifier(name) {
        Ok(())
    } else {
        Err(ModelError::InvalidIdentifier {
            table: table.to_string(),
            kind,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Argument, StoredProperty, SwiftType};

    fn string() -> SwiftType {
        SwiftType::named("String")
    }

    fn base_table() -> StringsTable {
        StringsTable::new("Localizable")
            .with_stored_property(StoredProperty::new("key", string()))
            .with_argument_enum(ArgumentEnum::standard())
    }

    #[test]
    fn test_valid_table_passes() {
        let table = base_table()
            .with_accessor(Accessor::new("greeting", "greeting"))
            .with_accessor(
                Accessor::new("welcome", "welcome").with_argument(Argument::new("name", string(), "object")),
            );
        assert_eq!(validate(&table), Ok(()));
    }

    #[test]
    fn test_duplicate_stored_property() {
        let table = base_table().with_stored_property(StoredProperty::new("key", string()));
        assert!(matches!(
            validate(&table),
            Err(ModelError::DuplicateStoredProperty { name, .. }) if name == "key"
        ));
    }

    #[test]
    fn test_accessor_shadows_stored_property() {
        let table = base_table().with_accessor(Accessor::new("key", "key"));
        assert!(matches!(
            validate(&table),
            Err(ModelError::AccessorShadowsStoredProperty { .. })
        ));
    }

    #[test]
    fn test_reserved_names() {
        for name in ["bundle", "defaultValue", "BundleLocator", "Argument", "Localizable", "localizedString"] {
            let table = base_table().with_accessor(Accessor::new(name, "k"));
            assert!(
                matches!(validate(&table), Err(ModelError::ReservedName { .. })),
                "{} should be reserved",
                name
            );
        }
    }

    #[test]
    fn test_declared_arguments_but_empty_list() {
        let mut accessor = Accessor::new("broken", "broken");
        accessor.declared_has_arguments = Some(true);
        let table = base_table().with_accessor(accessor);
        assert!(matches!(
            validate(&table),
            Err(ModelError::ArityMismatch { declared: true, count: 0, .. })
        ));
    }

    #[test]
    fn test_declared_plain_but_arguments_present() {
        let mut accessor = Accessor::new("broken", "broken").with_argument(Argument::new("n", string(), "object"));
        accessor.declared_has_arguments = Some(false);
        let table = base_table().with_accessor(accessor);
        assert!(matches!(
            validate(&table),
            Err(ModelError::ArityMismatch { declared: false, count: 1, .. })
        ));
    }

    #[test]
    fn test_missing_argument_enum() {
        let table = StringsTable::new("Localizable")
            .with_accessor(
                Accessor::new("welcome", "welcome").with_argument(Argument::new("name", string(), "object")),
            );
        assert!(matches!(validate(&table), Err(ModelError::MissingArgumentEnum { .. })));
    }

    #[test]
    fn test_argument_checks() {
        let dup = base_table().with_accessor(
            Accessor::new("pair", "pair")
                .with_argument(Argument::new("a", string(), "object"))
                .with_argument(Argument::new("a", string(), "object")),
        );
        assert!(matches!(validate(&dup), Err(ModelError::DuplicateArgument { .. })));

        let unknown =
            base_table().with_accessor(Accessor::new("x", "x").with_argument(Argument::new("a", string(), "text")));
        assert!(matches!(validate(&unknown), Err(ModelError::UnknownArgumentCase { .. })));

        let mismatch = base_table()
            .with_accessor(
                Accessor::new("x", "x").with_argument(Argument::new("a", SwiftType::named("Int"), "object")),
            );
        assert!(matches!(validate(&mismatch), Err(ModelError::ArgumentTypeMismatch { .. })));

        let invalid =
            base_table().with_accessor(Accessor::new("x", "x").with_argument(Argument::new("1st", string(), "object")));
        assert!(matches!(
            validate(&invalid),
            Err(ModelError::InvalidIdentifier { kind: "argument", .. })
        ));
    }

    #[test]
    fn test_argument_cannot_shadow_synthesized_members() {
        for name in ["bundle", "localizedString", "defaultValue", "Argument"] {
            let table = base_table()
                .with_accessor(
                    Accessor::new("welcome", "welcome").with_argument(Argument::new(name, string(), "object")),
                );
            assert!(
                matches!(validate(&table), Err(ModelError::ReservedName { name: ref n, .. }) if n == name),
                "argument {} should be reserved",
                name
            );
        }
    }

    #[test]
    fn test_local_names_are_allowed_as_arguments() {
        let table = base_table().with_accessor(
            Accessor::new("welcome", "welcome")
                .with_argument(Argument::new("value", string(), "object"))
                .with_argument(Argument::new("stringInterpolation", string(), "object")),
        );
        assert_eq!(validate(&table), Ok(()));
    }

    #[test]
    fn test_lone_underscore_is_rejected() {
        let table = base_table().with_stored_property(StoredProperty::new("_", string()));
        assert!(matches!(
            validate(&table),
            Err(ModelError::InvalidIdentifier { kind: "stored property", .. })
        ));
    }

    #[test]
    fn test_catalog_type_names_must_be_unique() {
        let tables = [base_table(), StringsTable::new("Other"), base_table()];
        assert_eq!(
            validate_catalog(&tables),
            Err(ModelError::DuplicateTableName {
                table: "Localizable".into()
            })
        );
        assert_eq!(validate_catalog(&tables[..2]), Ok(()));
    }
}
