//! Strings table model
//!
//! The input of the generator: one [`StringsTable`] per generated declaration, fully resolved by the
//! catalog parser before the synthesizers run. All types are plain immutable data; invariants are checked
//! by [`crate::backend::ir::lower::validate`] before any output is produced.
//!
//! Tables are usually read from JSON documents (camelCase field names), either a single table or a
//! catalog of several:
//!
//! ```json
//! { "tables": [ { "typeName": "Localizable", "accessors": [ { "name": "greeting", "key": "greeting" } ] } ] }
//! ```

use serde::{Deserialize, Serialize};
use stringgen_core::lang::runtime;

pub use crate::backend::ir::SwiftType;

/// Root model for one generated declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringsTable {
    /// Identifier of the emitted declaration
    pub type_name: String,
    /// Leading documentation of the declaration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_documentation: Option<String>,
    /// Visibility of the declaration and of every accessor
    #[serde(default)]
    pub access_level: AccessLevel,
    /// Instance state, in initializer-parameter order
    #[serde(default)]
    pub stored_properties: Vec<StoredProperty>,
    /// Argument carrier; required as soon as one accessor has arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_enum: Option<ArgumentEnum>,
    /// Accessors in emission order
    #[serde(default)]
    pub accessors: Vec<Accessor>,
}

impl StringsTable {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            header_documentation: None,
            access_level: AccessLevel::Default,
            stored_properties: Vec::new(),
            argument_enum: None,
            accessors: Vec::new(),
        }
    }

    pub fn with_header_documentation(mut self, doc: impl Into<String>) -> Self {
        self.header_documentation = Some(doc.into());
        self
    }

    pub fn with_access_level(mut self, access_level: AccessLevel) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn with_stored_property(mut self, property: StoredProperty) -> Self {
        self.stored_properties.push(property);
        self
    }

    pub fn with_argument_enum(mut self, argument_enum: ArgumentEnum) -> Self {
        self.argument_enum = Some(argument_enum);
        self
    }

    pub fn with_accessor(mut self, accessor: Accessor) -> Self {
        self.accessors.push(accessor);
        self
    }

    /// Whether any accessor takes arguments
    pub fn has_argument_accessors(&self) -> bool {
        self.accessors.iter().any(Accessor::has_arguments)
    }
}

/// Visibility modifier applied to the table and its accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// No explicit modifier (Swift's implicit `internal`)
    #[default]
    Default,
    Public,
    Package,
    Internal,
    Fileprivate,
    Private,
}

impl AccessLevel {
    /// Swift keyword, or `None` for [`AccessLevel::Default`]
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            AccessLevel::Default => None,
            AccessLevel::Public => Some("public"),
            AccessLevel::Package => Some("package"),
            AccessLevel::Internal => Some("internal"),
            AccessLevel::Fileprivate => Some("fileprivate"),
            AccessLevel::Private => Some("private"),
        }
    }
}

/// One `(name, type)` pair of instance state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SwiftType,
}

impl StoredProperty {
    pub fn new(name: impl Into<String>, ty: SwiftType) -> Self {
        Self { name: name.into(), ty }
    }
}

/// One translatable resource key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    /// Identifier of the generated member
    pub name: String,
    /// Literal resource key looked up at runtime
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Substitution arguments in catalog order
    #[serde(default)]
    pub arguments: Vec<Argument>,
    /// Arity flag as declared upstream; derived from `arguments` when absent
    #[serde(default, rename = "hasArguments", skip_serializing_if = "Option::is_none")]
    pub declared_has_arguments: Option<bool>,
}

impl Accessor {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            documentation: None,
            arguments: Vec::new(),
            declared_has_arguments: None,
        }
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Selects the synthesizer variant: callable when true, plain otherwise
    pub fn has_arguments(&self) -> bool {
        self.declared_has_arguments.unwrap_or(!self.arguments.is_empty())
    }
}

/// A substitution argument of an accessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SwiftType,
    /// Argument enum case that carries this value
    pub case_name: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: SwiftType, case_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            case_name: case_name.into(),
        }
    }
}

/// Closed set of cases carrying substitution values, scoped to one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentEnum {
    #[serde(default = "default_argument_enum_name")]
    pub name: String,
    pub cases: Vec<ArgumentCase>,
}

fn default_argument_enum_name() -> String {
    runtime::ARGUMENT_ENUM.to_string()
}

/// `case name(AssociatedType)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentCase {
    pub name: String,
    pub associated_type: SwiftType,
}

impl ArgumentEnum {
    pub fn new(cases: Vec<ArgumentCase>) -> Self {
        Self {
            name: default_argument_enum_name(),
            cases,
        }
    }

    /// The conventional carrier: `int(Int)`, `uint(UInt)`, `float(Float)`, `double(Double)`, `object(String)`
    pub fn standard() -> Self {
        Self::new(
            [
                ("int", "Int"),
                ("uint", "UInt"),
                ("float", "Float"),
                ("double", "Double"),
                ("object", "String"),
            ]
            .into_iter()
            .map(|(name, ty)| ArgumentCase {
                name: name.to_string(),
                associated_type: SwiftType::named(ty),
            })
            .collect(),
        )
    }

    /// Look up a case by name
    pub fn case(&self, name: &str) -> Option<&ArgumentCase> {
        self.cases.iter().find(|c| c.name == name)
    }

    /// First case whose associated type is `ty`
    pub fn case_for_type(&self, ty: &SwiftType) -> Option<&ArgumentCase> {
        self.cases.iter().find(|c| &c.associated_type == ty)
    }

    /// `[Name]`, the type of a stored argument list
    pub fn list_type(&self) -> SwiftType {
        SwiftType::array(SwiftType::named(self.name.clone()))
    }
}

/// A model document: a single table or a catalog of tables
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ModelDocument {
    Catalog { tables: Vec<StringsTable> },
    Single(StringsTable),
}

/// Parse a JSON model document into its tables, in document order
pub fn parse_document(json: &str) -> Result<Vec<StringsTable>, serde_json::Error> {
    let document: ModelDocument = serde_json::from_str(json)?;
    Ok(match document {
        ModelDocument::Catalog { tables } => tables,
        ModelDocument::Single(table) => vec![table],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_arguments_is_derived_when_not_declared() {
        let plain = Accessor::new("greeting", "greeting");
        assert!(!plain.has_arguments());

        let callable = Accessor::new("welcome", "welcome").with_argument(Argument::new(
            "name",
            SwiftType::named("String"),
            "object",
        ));
        assert!(callable.has_arguments());
    }

    #[test]
    fn test_has_argument_accessors() {
        let plain = StringsTable::new("Localizable").with_accessor(Accessor::new("greeting", "greeting"));
        assert!(!plain.has_argument_accessors());

        let callable = plain.with_accessor(Accessor::new("welcome", "welcome").with_argument(Argument::new(
            "name",
            SwiftType::named("String"),
            "object",
        )));
        assert!(callable.has_argument_accessors());
    }

    #[test]
    fn test_declared_flag_wins() {
        let mut accessor = Accessor::new("broken", "broken");
        accessor.declared_has_arguments = Some(true);
        assert!(accessor.has_arguments());
    }

    #[test]
    fn test_standard_argument_enum() {
        let carrier = ArgumentEnum::standard();
        assert_eq!(carrier.name, "Argument");
        assert_eq!(carrier.cases.len(), 5);
        assert_eq!(
            carrier.case_for_type(&SwiftType::named("String")).map(|c| c.name.as_str()),
            Some("object")
        );
        assert_eq!(carrier.list_type().to_string(), "[Argument]");
    }

    #[test]
    fn test_parse_single_table() {
        let json = r#"{
            "typeName": "Localizable",
            "accessLevel": "public",
            "storedProperties": [{ "name": "key", "type": "String" }],
            "argumentEnum": { "cases": [{ "name": "object", "associatedType": "String" }] },
            "accessors": [
                { "name": "greeting", "key": "greeting" },
                { "name": "welcome", "key": "welcome",
                  "arguments": [{ "name": "name", "type": "String", "caseName": "object" }] }
            ]
        }"#;
        let tables = parse_document(json).unwrap();
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.access_level, AccessLevel::Public);
        assert_eq!(table.argument_enum.as_ref().unwrap().name, "Argument");
        assert!(!table.accessors[0].has_arguments());
        assert!(table.accessors[1].has_arguments());
    }

    #[test]
    fn test_parse_catalog_keeps_order() {
        let json = r#"{ "tables": [ { "typeName": "A" }, { "typeName": "B" } ] }"#;
        let names: Vec<String> = parse_document(json).unwrap().into_iter().map(|t| t.type_name).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_parse_rejects_bad_type() {
        let json = r#"{ "typeName": "A", "storedProperties": [{ "name": "key", "type": "[String" }] }"#;
        assert!(parse_document(json).is_err());
    }
}
