//! Golden snapshot tests for codegen
//!
//! These tests generate Swift from strings tables and compare the output
//! against stored snapshots. This ensures codegen changes are reviewed
//! and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use stringgen::backend::{CodegenOptions, StringsCodegen};
use stringgen::model::{AccessLevel, Accessor, Argument, ArgumentEnum, StoredProperty, StringsTable, SwiftType};

/// Load a model document from the fixtures directory
fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}.json", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

fn localizable() -> StringsTable {
    StringsTable::new("Localizable")
        .with_header_documentation("Strings from Localizable.xcstrings")
        .with_access_level(AccessLevel::Public)
        .with_stored_property(StoredProperty::new("key", SwiftType::named("String")))
        .with_argument_enum(ArgumentEnum::standard())
        .with_accessor(Accessor::new("greeting", "greeting"))
        .with_accessor(Accessor::new("welcome", "welcome").with_argument(Argument::new(
            "name",
            SwiftType::named("String"),
            "object",
        )))
}

#[test]
fn test_public_table_codegen() {
    let swift = StringsCodegen::new()
        .try_generate(&localizable())
        .expect("generation failed");
    insta::assert_snapshot!("public_table", swift);
}

#[test]
fn test_source_file_with_argument_list_codegen() {
    let swift = StringsCodegen::new()
        .from_json(&load_fixture("formatted"))
        .expect("generation failed");
    insta::assert_snapshot!("source_file_with_argument_list", swift);
}

#[test]
fn test_minimal_table_codegen() {
    let table = StringsTable::new("Minimal");
    let codegen = StringsCodegen::with_options(CodegenOptions::new().with_source_file(false));
    let swift = codegen.generate_all(&[table]).expect("generation failed");
    insta::assert_snapshot!("minimal_table", swift);
}
