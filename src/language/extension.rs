use std::path::Path;

/// Extension key used for files whose name carries no extension.
pub const NO_EXTENSION: &str = "(no extension)";

/// Derive the grouping key for a file: its extension with the leading dot,
/// lower-cased.
///
/// Only the final path component is considered. A leading dot does not start
/// an extension (`.gitignore` has none), while a trailing dot yields `"."`.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension().map_or_else(
        || NO_EXTENSION.to_string(),
        |ext| format!(".{}", ext.to_string_lossy().to_lowercase()),
    )
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
