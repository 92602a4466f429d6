//! Swift keyword vocabulary (for identifier escaping in generated declarations).

/// Keywords reserved in declarations, statements and expressions.
///
/// Contextual keywords (`get`, `set`, `some`, ...) are valid identifiers and are not listed.
pub const SWIFT_KEYWORDS: &[&str] = &[
    // declarations
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import", "init", "inout",
    "internal", "let", "open", "operator", "private", "precedencegroup", "protocol", "public", "rethrows", "static",
    "struct", "subscript", "typealias", "var",
    // statements
    "break", "case", "catch", "continue", "default", "defer", "do", "else", "fallthrough", "for", "guard", "if", "in",
    "repeat", "return", "throw", "switch", "where", "while",
    // expressions and types
    "Any", "as", "await", "false", "is", "nil", "self", "Self", "super", "throws", "true", "try",
];

/// Check whether an identifier is a reserved Swift keyword.
pub fn is_keyword(name: &str) -> bool {
    SWIFT_KEYWORDS.contains(&name)
}

/// Escape an identifier with backticks when it collides with a keyword.
pub fn escape_identifier(name: &str) -> String {
    if is_keyword(name) {
        format!("`{}`", name)
    } else {
        name.to_string()
    }
}

/// Check whether `name` is a plain Swift identifier (ASCII subset).
///
/// The first character must be a letter or `_`; the rest letters, digits or `_`. Keywords are accepted
/// because [`escape_identifier`] makes them usable. A lone `_` is the wildcard, not a name.
pub fn is_valid_identifier(name: &str) -> bool {
    if name == "_" {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
