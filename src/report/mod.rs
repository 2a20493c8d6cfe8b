//! Per-extension aggregates of a single scan.

use indexmap::IndexMap;
use serde::Serialize;

use crate::counter::LineStats;

/// Line counts of one file, tagged with its extension key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub extension: String,
    pub stats: LineStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    pub files: usize,
    pub code: usize,
    pub comments: usize,
    pub blanks: usize,
}

impl ExtensionStats {
    const fn add(&mut self, stats: &LineStats) {
        self.files += 1;
        self.code += stats.code;
        self.comments += stats.comment;
        self.blanks += stats.blank;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_files: usize,
    pub total_code: usize,
    pub total_comments: usize,
    pub total_blanks: usize,
}

impl Totals {
    const fn add(&mut self, stats: &LineStats) {
        self.total_files += 1;
        self.total_code += stats.code;
        self.total_comments += stats.comment;
        self.total_blanks += stats.blank;
    }
}

/// Result of a scan.
///
/// Extensions keep the order in which they were first folded in, so ranking
/// ties resolve to listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    tracked_files: usize,
    by_extension: IndexMap<String, ExtensionStats>,
    totals: Totals,
}

impl Report {
    /// `tracked_files` is the size of the listing before any filtering.
    #[must_use]
    pub fn new(tracked_files: usize) -> Self {
        Self {
            tracked_files,
            ..Self::default()
        }
    }

    /// Add one file to its extension entry and to the totals.
    pub fn fold(&mut self, record: FileRecord) {
        self.by_extension
            .entry(record.extension)
            .or_default()
            .add(&record.stats);
        self.totals.add(&record.stats);
    }

    #[must_use]
    pub const fn tracked_files(&self) -> usize {
        self.tracked_files
    }

    #[must_use]
    pub const fn totals(&self) -> &Totals {
        &self.totals
    }

    #[must_use]
    pub fn get(&self, extension: &str) -> Option<&ExtensionStats> {
        self.by_extension.get(extension)
    }

    /// Extensions in first-seen order.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &ExtensionStats)> {
        self.by_extension.iter().map(|(ext, stats)| (ext.as_str(), stats))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }

    /// Extensions by descending code lines.
    #[must_use]
    pub fn ranked_by_code(&self) -> Vec<(&str, &ExtensionStats)> {
        self.ranked_by(|stats| stats.code)
    }

    /// Extensions by descending comment lines.
    #[must_use]
    pub fn ranked_by_comments(&self) -> Vec<(&str, &ExtensionStats)> {
        self.ranked_by(|stats| stats.comments)
    }

    fn ranked_by(&self, key: impl Fn(&ExtensionStats) -> usize) -> Vec<(&str, &ExtensionStats)> {
        let mut ranked: Vec<_> = self.extensions().collect();
        // stable: equal keys stay in first-seen order
        ranked.sort_by(|a, b| key(b.1).cmp(&key(a.1)));
        ranked
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
