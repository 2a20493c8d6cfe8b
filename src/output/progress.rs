use std::io::IsTerminal;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::LocTallyError;
use crate::scanner::ScanObserver;

/// Progress bar for the file scan, doubling as the sink for per-file read
/// failures.
///
/// The bar is disabled in quiet mode or when stderr is not a TTY. Failures
/// are printed to stderr unless quiet.
pub struct ScanProgress {
    progress_bar: ProgressBar,
    quiet: bool,
    failures: usize,
}

impl ScanProgress {
    /// The length is set once the tracked files have been listed.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar()
        };

        Self {
            progress_bar,
            quiet,
            failures: 0,
        }
    }

    fn create_visible_progress_bar() -> ProgressBar {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Counting [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)",
                )
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Number of files that could not be read so far.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl ScanObserver for ScanProgress {
    fn listed(&mut self, count: usize) {
        self.progress_bar.set_length(count as u64);
    }

    fn advanced(&mut self, _path: &Path) {
        self.progress_bar.inc(1);
    }

    fn read_failed(&mut self, error: &LocTallyError) {
        self.failures += 1;
        if !self.quiet {
            self.progress_bar.suspend(|| eprintln!("{error}"));
        }
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
