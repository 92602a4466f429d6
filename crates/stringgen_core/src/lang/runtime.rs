//! Names of the runtime support layer that generated code calls into.
//!
//! Generated accessors never implement lookup themselves; they forward to these entry points.

/// Lookup entry point taking `(key:arguments:bundle:)` and returning the localized `String`.
pub const LOOKUP_FUNCTION: &str = "localizedString";

/// Argument labels of [`LOOKUP_FUNCTION`], in call order.
pub const LOOKUP_LABELS: [&str; 3] = ["key", "arguments", "bundle"];

/// Foundation bundle type.
pub const BUNDLE_TYPE: &str = "Bundle";

/// Per-module bundle handle synthesized by SwiftPM (`Bundle.module`).
pub const MODULE_BUNDLE: &str = "module";

/// Label of the `Bundle(for:)` initializer that finds the bundle containing a class.
pub const BUNDLE_FOR_CLASS_LABEL: &str = "for";

/// Nested class used to locate the bundle outside SwiftPM.
pub const BUNDLE_LOCATOR: &str = "BundleLocator";

/// Name of the computed bundle accessor on every generated table.
pub const BUNDLE_PROPERTY: &str = "bundle";

/// Name of the gated default value accessor on every generated table.
pub const DEFAULT_VALUE_PROPERTY: &str = "defaultValue";

/// Conventional name of the argument carrier enum.
pub const ARGUMENT_ENUM: &str = "Argument";

/// Protocol every generated table and argument carrier conforms to.
pub const SENDABLE: &str = "Sendable";

/// Module imported by generated source files.
pub const FOUNDATION: &str = "Foundation";
