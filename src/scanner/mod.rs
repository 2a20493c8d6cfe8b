mod filter;

pub use filter::{DEFAULT_EXCLUDED_SUFFIXES, FileFilter, SuffixFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::counter::{LineStats, SlocCounter};
use crate::error::{LocTallyError, Result};
use crate::git::TrackedFiles;
use crate::language::{LanguageRegistry, extension_of};
use crate::report::{FileRecord, Report};

/// Hooks into a running scan. All methods default to doing nothing.
pub trait ScanObserver {
    /// Called once with the number of listed paths, before any file is read.
    fn listed(&mut self, _count: usize) {}

    /// Called after each listed path, whether it was counted, skipped or failed.
    fn advanced(&mut self, _path: &Path) {}

    /// Called for a file that could not be read. The scan continues.
    fn read_failed(&mut self, _error: &LocTallyError) {}
}

impl ScanObserver for () {}

/// Counts code, comment and blank lines of every tracked file under `root`.
pub struct LineCounter<L: TrackedFiles, F: FileFilter = SuffixFilter> {
    root: PathBuf,
    lister: L,
    filter: F,
    registry: LanguageRegistry,
}

impl<L: TrackedFiles> LineCounter<L> {
    #[must_use]
    pub fn new(root: &Path, lister: L) -> Self {
        Self::with_filter(root, lister, SuffixFilter::default())
    }
}

impl<L: TrackedFiles, F: FileFilter> LineCounter<L, F> {
    #[must_use]
    pub fn with_filter(root: &Path, lister: L, filter: F) -> Self {
        Self {
            root: root.to_path_buf(),
            lister,
            filter,
            registry: LanguageRegistry::default(),
        }
    }

    /// Scan without observing progress or read failures.
    ///
    /// # Errors
    /// Returns [`LocTallyError::Repository`] if the tracked files cannot be listed.
    pub fn run(&self) -> Result<Report> {
        self.run_with(&mut ())
    }

    /// Scan, reporting progress and recovered read failures to `observer`.
    ///
    /// # Errors
    /// Returns [`LocTallyError::Repository`] if the tracked files cannot be
    /// listed. Per-file read failures are not errors of the run.
    pub fn run_with<O: ScanObserver + ?Sized>(&self, observer: &mut O) -> Result<Report> {
        let files = self.lister.list()?;
        observer.listed(files.len());

        let mut report = Report::new(files.len());
        for path in &files {
            match self.scan_file(path) {
                Ok(Some(record)) => report.fold(record),
                Ok(None) => {}
                Err(e) => observer.read_failed(&e),
            }
            observer.advanced(path);
        }

        Ok(report)
    }

    /// `Ok(None)` for paths that are excluded or are directories.
    fn scan_file(&self, relative: &Path) -> Result<Option<FileRecord>> {
        if !self.filter.should_include(relative) {
            return Ok(None);
        }

        let full = self.root.join(relative);
        if full.is_dir() {
            return Ok(None);
        }

        let extension = extension_of(relative);
        let stats = self
            .count_file(&full, &extension)
            .map_err(|source| LocTallyError::FileRead {
                path: relative.to_path_buf(),
                source,
            })?;

        Ok(Some(FileRecord { extension, stats }))
    }

    fn count_file(&self, path: &Path, extension: &str) -> std::io::Result<LineStats> {
        let file = File::open(path)?;
        SlocCounter::new(self.registry.prefixes_for(extension)).count_reader(BufReader::new(file))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
