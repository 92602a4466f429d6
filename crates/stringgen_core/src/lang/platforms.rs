//! Availability platforms and the minimum versions of the localized value API.
//!
//! `String.LocalizationValue` ships with macOS 12, iOS 15, tvOS 15 and watchOS 8. The default value
//! accessor is gated on exactly these minimums, independent of table content.
//!
//! ## Examples
//! ```rust
//! use stringgen_core::lang::platforms::{self, PlatformId};
//!
//! assert_eq!(platforms::as_str(PlatformId::MacOs), "macOS");
//! assert_eq!(platforms::LOCALIZED_VALUE_MINIMUMS.len(), 4);
//! ```

/// Stable identifier for each availability platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformId {
    MacOs,
    Ios,
    TvOs,
    WatchOs,
}

/// Metadata for a platform family.
#[derive(Debug, Clone, Copy)]
pub struct PlatformInfo {
    pub id: PlatformId,
    /// Spelling inside `@available(...)`.
    pub canonical: &'static str,
}

pub const PLATFORMS: &[PlatformInfo] = &[
    PlatformInfo {
        id: PlatformId::MacOs,
        canonical: "macOS",
    },
    PlatformInfo {
        id: PlatformId::Ios,
        canonical: "iOS",
    },
    PlatformInfo {
        id: PlatformId::TvOs,
        canonical: "tvOS",
    },
    PlatformInfo {
        id: PlatformId::WatchOs,
        canonical: "watchOS",
    },
];

/// A `(platform, major version)` minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimum {
    pub platform: PlatformId,
    pub major: u32,
}

/// Minimum versions of `String.LocalizationValue`, in `@available` order.
pub const LOCALIZED_VALUE_MINIMUMS: &[Minimum] = &[
    Minimum {
        platform: PlatformId::MacOs,
        major: 12,
    },
    Minimum {
        platform: PlatformId::Ios,
        major: 15,
    },
    Minimum {
        platform: PlatformId::TvOs,
        major: 15,
    },
    Minimum {
        platform: PlatformId::WatchOs,
        major: 8,
    },
];

/// Return the `@available` spelling of a platform.
pub fn as_str(id: PlatformId) -> &'static str {
    info_for(id).canonical
}

/// Look up a platform by its `@available` spelling (case-sensitive).
pub fn from_str(name: &str) -> Option<PlatformId> {
    PLATFORMS.iter().find(|p| p.canonical == name).map(|p| p.id)
}

/// Return the metadata entry for a platform.
pub fn info_for(id: PlatformId) -> &'static PlatformInfo {
    match id {
        PlatformId::MacOs => &PLATFORMS[0],
        PlatformId::Ios => &PLATFORMS[1],
        PlatformId::TvOs => &PLATFORMS[2],
        PlatformId::WatchOs => &PLATFORMS[3],
    }
}
