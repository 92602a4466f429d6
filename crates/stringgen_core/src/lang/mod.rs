//! Swift vocabulary registries.
//!
//! Callers work with stable IDs (e.g. [`platforms::PlatformId`]) and look up spellings through the
//! registry tables instead of scattering string literals across the synthesizers.
//!
//! ## Examples
//! ```rust
//! use stringgen_core::lang::{build_flags, swift_keywords};
//!
//! assert!(swift_keywords::is_keyword("default"));
//! assert_eq!(build_flags::SWIFT_PACKAGE, "SWIFT_PACKAGE");
//! ```

pub mod build_flags;
pub mod platforms;
pub mod runtime;
pub mod swift_keywords;
