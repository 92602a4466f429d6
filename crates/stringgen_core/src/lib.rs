//! Provide the canonical Swift vocabulary shared by the stringgen synthesizers and printer.
//!
//! This crate is intentionally small and dependency-free. It records the spellings that generated
//! code must agree on with the Swift toolchain and with the runtime support layer:
//! - reserved words that need backtick escaping when used as identifiers,
//! - build-configuration flags tested by `#if` blocks,
//! - availability platforms and the minimum versions of the localized value API,
//! - names the generated accessors call into.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no tree types.

pub mod lang;
