//! Model errors must stop generation before any output is produced.

use stringgen::backend::{assemble, GenerationError, ModelError, StringsCodegen};
use stringgen::model::{parse_document, Accessor, Argument, ArgumentEnum, StoredProperty, StringsTable, SwiftType};

fn string() -> SwiftType {
    SwiftType::named("String")
}

#[test]
fn duplicate_stored_property_is_rejected() {
    let table = StringsTable::new("Localizable")
        .with_stored_property(StoredProperty::new("key", string()))
        .with_stored_property(StoredProperty::new("key", SwiftType::named("Int")));
    assert_eq!(
        assemble(&table),
        Err(ModelError::DuplicateStoredProperty {
            table: "Localizable".into(),
            name: "key".into(),
        })
    );
}

#[test]
fn declared_arguments_without_any_is_an_arity_mismatch() {
    let mut accessor = Accessor::new("welcome", "welcome");
    accessor.declared_has_arguments = Some(true);
    let table = StringsTable::new("Localizable").with_accessor(accessor);
    assert_eq!(
        assemble(&table),
        Err(ModelError::ArityMismatch {
            table: "Localizable".into(),
            accessor: "welcome".into(),
            declared: true,
            count: 0,
        })
    );
}

#[test]
fn declared_no_arguments_with_some_is_an_arity_mismatch() {
    let mut accessor = Accessor::new("welcome", "welcome").with_argument(Argument::new("name", string(), "object"));
    accessor.declared_has_arguments = Some(false);
    let table = StringsTable::new("Localizable")
        .with_argument_enum(ArgumentEnum::standard())
        .with_accessor(accessor);
    assert!(matches!(
        assemble(&table),
        Err(ModelError::ArityMismatch { declared: false, count: 1, .. })
    ));
}

#[test]
fn callable_accessor_requires_an_argument_enum() {
    let table = StringsTable::new("Localizable")
        .with_accessor(Accessor::new("welcome", "welcome").with_argument(Argument::new("name", string(), "object")));
    assert!(matches!(assemble(&table), Err(ModelError::MissingArgumentEnum { .. })));
}

#[test]
fn argument_type_must_match_its_case() {
    let table = StringsTable::new("Localizable")
        .with_argument_enum(ArgumentEnum::standard())
        .with_accessor(Accessor::new("count", "count").with_argument(Argument::new("n", string(), "int")));
    match assemble(&table) {
        Err(ModelError::ArgumentTypeMismatch { expected, found, .. }) => {
            assert_eq!(expected, "Int");
            assert_eq!(found, "String");
        }
        other => panic!("expected type mismatch, got {:?}", other),
    }
}

#[test]
fn model_error_surfaces_through_codegen() {
    let json = r#"{ "typeName": "Localizable", "accessors": [
        { "name": "title", "key": "a" },
        { "name": "title", "key": "b" }
    ] }"#;
    let err = StringsCodegen::new().from_json(json).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Model(ModelError::DuplicateAccessor { ref name, .. }) if name == "title"
    ));
}

#[test]
fn arity_flag_round_trips_from_json() {
    let json = r#"{ "typeName": "Localizable", "accessors": [
        { "name": "welcome", "key": "welcome", "hasArguments": true }
    ] }"#;
    let tables = parse_document(json).unwrap();
    assert!(matches!(
        assemble(&tables[0]),
        Err(ModelError::ArityMismatch { declared: true, count: 0, .. })
    ));
}

#[test]
fn argument_named_bundle_is_rejected() {
    let table = StringsTable::new("Localizable")
        .with_argument_enum(ArgumentEnum::standard())
        .with_accessor(Accessor::new("welcome", "welcome").with_argument(Argument::new("bundle", string(), "object")));
    assert_eq!(
        assemble(&table),
        Err(ModelError::ReservedName {
            table: "Localizable".into(),
            name: "bundle".into(),
        })
    );
}

#[test]
fn argument_named_like_the_lookup_function_is_rejected() {
    let table = StringsTable::new("Localizable")
        .with_argument_enum(ArgumentEnum::standard())
        .with_accessor(
            Accessor::new("welcome", "welcome").with_argument(Argument::new("localizedString", string(), "object")),
        );
    assert!(matches!(
        assemble(&table),
        Err(ModelError::ReservedName { ref name, .. }) if name == "localizedString"
    ));
}

#[test]
fn stored_property_named_like_a_local_is_read_through_self() {
    let table = StringsTable::new("Localizable")
        .with_stored_property(StoredProperty::new("stringInterpolation", string()))
        .with_stored_property(StoredProperty::new("makeDefaultValue", string()));
    let swift = StringsCodegen::new().try_generate(&table).unwrap();
    assert!(swift.contains("stringInterpolation.appendInterpolation(self.stringInterpolation)\n"));
    assert!(swift.contains("stringInterpolation.appendInterpolation(self.makeDefaultValue)\n"));
    assert!(swift.contains("interpolationCount: 2)"));
}

#[test]
fn repeated_type_name_in_catalog_is_rejected() {
    let json = r#"{ "tables": [ { "typeName": "Localizable" }, { "typeName": "Localizable" } ] }"#;
    let err = StringsCodegen::new().from_json(json).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Model(ModelError::DuplicateTableName { ref table }) if table == "Localizable"
    ));
}
