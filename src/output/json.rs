use serde::Serialize;

use crate::error::Result;
use crate::report::{ExtensionStats, Report, Totals};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    tracked_files: usize,
    extensions: Vec<JsonExtension<'a>>,
    totals: &'a Totals,
}

#[derive(Serialize)]
struct JsonExtension<'a> {
    extension: &'a str,
    #[serde(flatten)]
    stats: &'a ExtensionStats,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            tracked_files: report.tracked_files(),
            extensions: report
                .ranked_by_code()
                .into_iter()
                .map(|(extension, stats)| JsonExtension { extension, stats })
                .collect(),
            totals: report.totals(),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
