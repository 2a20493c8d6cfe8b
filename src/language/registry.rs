use std::collections::HashMap;

/// Line-comment family of an extension.
///
/// Only single-line prefixes are recognized; block comments are counted as
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//` line comments (C family, Rust, Go, JavaScript, ...)
    DoubleSlash,
    /// `#` line comments (Python, shell, TOML, YAML)
    Hash,
    /// No recognized comment syntax; every non-blank line is code.
    Plain,
}

impl CommentStyle {
    #[must_use]
    pub const fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::DoubleSlash => &["//"],
            Self::Hash => &["#"],
            Self::Plain => &[],
        }
    }
}

/// Fixed extension table. Extensions are lower-case and include the dot.
const EXTENSION_TABLE: &[(&[&str], CommentStyle)] = &[
    (
        &[".rs", ".ts", ".js", ".c", ".cpp", ".java", ".go"],
        CommentStyle::DoubleSlash,
    ),
    (
        &[".py", ".sh", ".toml", ".yml", ".yaml"],
        CommentStyle::Hash,
    ),
];

#[derive(Debug)]
pub struct LanguageRegistry {
    extension_map: HashMap<&'static str, CommentStyle>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        let extension_map = EXTENSION_TABLE
            .iter()
            .flat_map(|(extensions, style)| extensions.iter().map(move |ext| (*ext, *style)))
            .collect();
        Self { extension_map }
    }

    /// Comment style for an extension key as produced by
    /// [`extension_of`](super::extension_of). Unknown keys are [`CommentStyle::Plain`].
    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> CommentStyle {
        self.extension_map
            .get(ext)
            .copied()
            .unwrap_or(CommentStyle::Plain)
    }

    #[must_use]
    pub fn prefixes_for(&self, ext: &str) -> &'static [&'static str] {
        self.get_by_extension(ext).prefixes()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
