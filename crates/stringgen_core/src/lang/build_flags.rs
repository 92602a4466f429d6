//! Build-configuration flags tested by generated `#if` blocks.

/// Set by SwiftPM when a target is built as part of a package.
///
/// Package builds expose `Bundle.module`; every other build resolves resources through a locator class.
pub const SWIFT_PACKAGE: &str = "SWIFT_PACKAGE";
