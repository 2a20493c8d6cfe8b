use std::path::PathBuf;

use clap::Parser;

use crate::git::ListingBackend;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "loc-tally")]
#[command(
    author,
    version,
    about = "Count code, comment and blank lines of git-tracked files by extension"
)]
#[command(long_about = "Lists the files tracked by git, classifies every line as code, \
    comment or blank, and prints totals grouped by file extension.\n\n\
    Exit codes:\n  \
    0 - Report printed\n  \
    2 - Not a git repository, git missing, or output error")]
pub struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// How to obtain the list of tracked files
    #[arg(long, value_enum, default_value = "command")]
    pub backend: ListingBackend,

    /// Suppress the progress bar and per-file read errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
