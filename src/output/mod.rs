mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::{RULE_WIDTH, TextFormatter};

use clap::ValueEnum;

use crate::error::Result;
use crate::report::Report;

/// Trait for rendering a scan report.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Three plain-text tables
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
