use std::path::Path;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Suffixes excluded from every scan.
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &[".xml"];

/// Rejects paths whose name ends with one of a set of suffixes, ignoring case.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
    excluded: Vec<String>,
}

impl SuffixFilter {
    #[must_use]
    pub fn new<S: AsRef<str>>(excluded: &[S]) -> Self {
        Self {
            excluded: excluded
                .iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let name = path.to_string_lossy().to_lowercase();
        self.excluded.iter().any(|suffix| name.ends_with(suffix))
    }
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_SUFFIXES)
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
