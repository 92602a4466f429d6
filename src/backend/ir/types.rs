//! Swift type references
//!
//! Types coming from the model are written in Swift spelling (`String`, `[Argument]`, `String?`,
//! `String.LocalizationValue`) and parsed once into [`SwiftType`] so synthesizers can compare them
//! structurally instead of by text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A Swift type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SwiftType {
    /// A plain type name (`String`, `Int`, `Argument`)
    Named(String),
    /// A nested type (`String.LocalizationValue`)
    Member { base: Box<SwiftType>, name: String },
    /// `[T]`
    Array(Box<SwiftType>),
    /// `T?`
    Optional(Box<SwiftType>),
}

impl SwiftType {
    pub fn named(name: impl Into<String>) -> Self {
        SwiftType::Named(name.into())
    }

    pub fn member(base: SwiftType, name: impl Into<String>) -> Self {
        SwiftType::Member {
            base: Box::new(base),
            name: name.into(),
        }
    }

    pub fn array(element: SwiftType) -> Self {
        SwiftType::Array(Box::new(element))
    }

    pub fn optional(wrapped: SwiftType) -> Self {
        SwiftType::Optional(Box::new(wrapped))
    }

    /// Element type if this is `[T]`
    pub fn array_element(&self) -> Option<&SwiftType> {
        match self {
            SwiftType::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Check whether this is `[name]` for the given plain type name
    pub fn is_array_of(&self, name: &str) -> bool {
        matches!(self.array_element(), Some(SwiftType::Named(n)) if n == name)
    }
}

impl fmt::Display for SwiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwiftType::Named(name) => write!(f, "{}", name),
            SwiftType::Member { base, name } => write!(f, "{}.{}", base, name),
            SwiftType::Array(element) => write!(f, "[{}]", element),
            SwiftType::Optional(wrapped) => write!(f, "{}?", wrapped),
        }
    }
}

/// Error when a type spelling cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid Swift type `{spelling}`")]
pub struct TypeParseError {
    pub spelling: String,
}

impl FromStr for SwiftType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TypeParseError { spelling: s.to_string() };
        let s = s.trim();

        if let Some(inner) = s.strip_suffix('?') {
            return inner.parse().map(SwiftType::optional).map_err(|_| err());
        }
        if let Some(inner) = s.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(err)?;
            return inner.parse().map(SwiftType::array).map_err(|_| err());
        }

        let mut segments = s.split('.');
        let first = segments.next().filter(|seg| is_type_segment(seg)).ok_or_else(err)?;
        let mut ty = SwiftType::named(first);
        for seg in segments {
            if !is_type_segment(seg) {
                return Err(err());
            }
            ty = SwiftType::member(ty, seg);
        }
        Ok(ty)
    }
}

fn is_type_segment(seg: &str) -> bool {
    let mut chars = seg.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl TryFrom<String> for SwiftType {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SwiftType> for String {
    fn from(ty: SwiftType) -> Self {
        ty.to_string()
    }
}
