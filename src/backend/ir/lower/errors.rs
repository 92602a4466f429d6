//! Error types for model validation.
//!
//! A [`ModelError`] means the upstream model broke an invariant the synthesizers rely on. These are
//! tooling defects, not runtime states: assembly stops at the first one and emits nothing.

use miette::Diagnostic;
use thiserror::Error;

/// Invariant violation in a [`crate::model::StringsTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ModelError {
    #[error("table `{table}`: stored property `{name}` is declared more than once")]
    #[diagnostic(
        code(stringgen::model::duplicate_stored_property),
        help("stored properties become initializer parameters and must be unique")
    )]
    DuplicateStoredProperty { table: String, name: String },

    #[error("table `{table}` is declared more than once in the catalog")]
    #[diagnostic(
        code(stringgen::model::duplicate_table),
        help("every table is nested in the same `extension String`; give each a distinct type name")
    )]
    DuplicateTableName { table: String },

    #[error("table `{table}`: accessor `{name}` is declared more than once")]
    #[diagnostic(
        code(stringgen::model::duplicate_accessor),
        help("give each key a distinct accessor name")
    )]
    DuplicateAccessor { table: String, name: String },

    #[error("table `{table}`: accessor `{name}` collides with a stored property of the same name")]
    #[diagnostic(code(stringgen::model::accessor_shadows_property))]
    AccessorShadowsStoredProperty { table: String, name: String },

    #[error("table `{table}`: `{name}` is reserved for a synthesized member")]
    #[diagnostic(
        code(stringgen::model::reserved_name),
        help(
            "`bundle`, `defaultValue`, `BundleLocator`, `localizedString`, the argument enum and the table type name \
             are used by generated code"
        )
    )]
    ReservedName { table: String, name: String },

    #[error("table `{table}`: {kind} name `{name}` is not a valid identifier")]
    #[diagnostic(code(stringgen::model::invalid_identifier))]
    InvalidIdentifier {
        table: String,
        kind: &'static str,
        name: String,
    },

    #[error(
        "table `{table}`: accessor `{accessor}` declares hasArguments = {declared} but has {count} argument(s)"
    )]
    #[diagnostic(code(stringgen::model::arity_mismatch))]
    ArityMismatch {
        table: String,
        accessor: String,
        declared: bool,
        count: usize,
    },

    #[error("table `{table}`: accessor `{accessor}` declares argument `{name}` more than once")]
    #[diagnostic(code(stringgen::model::duplicate_argument))]
    DuplicateArgument {
        table: String,
        accessor: String,
        name: String,
    },

    #[error("table `{table}`: accessor `{accessor}` has arguments but the table has no argument enum")]
    #[diagnostic(
        code(stringgen::model::missing_argument_enum),
        help("declare `argumentEnum` (e.g. the standard int/uint/float/double/object carrier)")
    )]
    MissingArgumentEnum { table: String, accessor: String },

    #[error("table `{table}`: argument enum declares case `{name}` more than once")]
    #[diagnostic(code(stringgen::model::duplicate_argument_case))]
    DuplicateArgumentCase { table: String, name: String },

    #[error("table `{table}`: argument `{argument}` of `{accessor}` refers to unknown case `{case_name}`")]
    #[diagnostic(code(stringgen::model::unknown_argument_case))]
    UnknownArgumentCase {
        table: String,
        accessor: String,
        argument: String,
        case_name: String,
    },

    #[error(
        "table `{table}`: argument `{argument}` of `{accessor}` has type `{found}` \
         but case `{case_name}` carries `{expected}`"
    )]
    #[diagnostic(code(stringgen::model::argument_type_mismatch))]
    ArgumentTypeMismatch {
        table: String,
        accessor: String,
        argument: String,
        case_name: String,
        expected: String,
        found: String,
    },
}
