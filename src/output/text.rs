use std::fmt::Write;

use crate::error::Result;
use crate::report::{ExtensionStats, Report};

use super::ReportFormatter;

/// Width of the separator rule above and below table rows.
pub const RULE_WIDTH: usize = 40;

/// Renders the code table, the comment table and the summary.
pub struct TextFormatter;

impl TextFormatter {
    fn write_table(
        output: &mut String,
        title: &str,
        value_header: &str,
        rows: &[(&str, &ExtensionStats)],
        value: impl Fn(&ExtensionStats) -> usize,
        total_files: usize,
        total_value: usize,
    ) {
        let rule = "-".repeat(RULE_WIDTH);

        let _ = writeln!(output);
        let _ = writeln!(output, "=== {title} ===");
        let _ = writeln!(output, "{:<15} {:<10} {:<15}", "Extension", "Files", value_header);
        let _ = writeln!(output, "{rule}");
        for (extension, stats) in rows {
            let _ = writeln!(output, "{:<15} {:<10} {:<15}", extension, stats.files, value(stats));
        }
        let _ = writeln!(output, "{rule}");
        let _ = writeln!(output, "{:<15} {:<10} {:<15}", "TOTAL", total_files, total_value);
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        let totals = report.totals();

        let _ = writeln!(output, "Total files found by git: {}", report.tracked_files());

        Self::write_table(
            &mut output,
            "CODE CONTENT",
            "Code Lines",
            &report.ranked_by_code(),
            |s| s.code,
            totals.total_files,
            totals.total_code,
        );
        Self::write_table(
            &mut output,
            "COMMENT CONTENT",
            "Comment Lines",
            &report.ranked_by_comments(),
            |s| s.comments,
            totals.total_files,
            totals.total_comments,
        );

        let _ = writeln!(output);
        let _ = writeln!(output, "=== SUMMARY ===");
        let _ = writeln!(output, "Total Files:    {}", totals.total_files);
        let _ = writeln!(output, "Total Code:     {}", totals.total_code);
        let _ = writeln!(output, "Total Comments: {}", totals.total_comments);
        let _ = writeln!(output, "Total Blanks:   {}", totals.total_blanks);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
