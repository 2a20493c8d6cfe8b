use std::io::Write;

use clap::Parser;

use loc_tally::cli::Cli;
use loc_tally::output::ScanProgress;
use loc_tally::report::Report;
use loc_tally::scanner::LineCounter;
use loc_tally::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_count(&cli));
}

fn run_count(cli: &Cli) -> i32 {
    match run_count_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.suggestion() {
                eprintln!("  help: {hint}");
            }
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_count_impl(cli: &Cli) -> loc_tally::Result<()> {
    // 1. List, read and classify
    let report = scan(cli)?;

    // 2. Format output
    let output = cli.format.formatter().format(&report)?;

    // 3. Write output
    write_output(&output)
}

fn scan(cli: &Cli) -> loc_tally::Result<Report> {
    let counter = LineCounter::new(&cli.dir, cli.backend.lister(&cli.dir));
    let mut progress = ScanProgress::new(cli.quiet);

    let result = counter.run_with(&mut progress);
    progress.finish();

    if !cli.quiet && progress.failures() > 0 {
        eprintln!("Skipped {} unreadable file(s)", progress.failures());
    }
    result
}

fn write_output(content: &str) -> loc_tally::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
