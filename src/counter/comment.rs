/// Matches trimmed lines against a set of single-line comment prefixes.
#[derive(Debug, Clone, Copy)]
pub struct CommentDetector<'a> {
    prefixes: &'a [&'a str],
}

impl<'a> CommentDetector<'a> {
    #[must_use]
    pub const fn new(prefixes: &'a [&'a str]) -> Self {
        Self { prefixes }
    }

    /// `trimmed` must already have surrounding whitespace removed.
    #[must_use]
    pub fn is_single_line_comment(&self, trimmed: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
