//! Argument carrier synthesis: `enum Argument: Sendable { case int(Int) ... }`.

use stringgen_core::lang::runtime;

use super::super::decl::{Decl, DeclKind, EnumCaseDecl, EnumDecl};
use crate::model::ArgumentEnum;

/// Build the argument carrier declaration shared by every callable accessor of a table.
pub fn synthesize_argument_enum(argument_enum: &ArgumentEnum) -> Decl {
    Decl::new(DeclKind::Enum(EnumDecl {
        name: argument_enum.name.clone(),
        conformances: vec![runtime::SENDABLE.to_string()],
        cases: argument_enum
            .cases
            .iter()
            .map(|case| EnumCaseDecl {
                name: case.name.clone(),
                associated: vec![case.associated_type.clone()],
            })
            .collect(),
    }))
}
