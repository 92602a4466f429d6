//! Printer configuration for generated Swift
//!
//! Defaults follow the layout of hand-written Swift in Xcode projects.

/// Printer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Whether to separate member groups with a blank line
    pub blank_line_between_members: bool,
    /// Whether initializer parameters are laid out one per line
    pub multiline_initializer: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_line_between_members: true,
            multiline_initializer: true,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set whether member groups are separated by a blank line
    pub fn with_blank_line_between_members(mut self, enabled: bool) -> Self {
        self.blank_line_between_members = enabled;
        self
    }

    /// Set whether initializer parameters go one per line
    pub fn with_multiline_initializer(mut self, enabled: bool) -> Self {
        self.multiline_initializer = enabled;
        self
    }
}
