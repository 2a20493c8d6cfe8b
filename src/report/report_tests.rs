use super::*;

fn record(extension: &str, code: usize, comment: usize, blank: usize) -> FileRecord {
    FileRecord {
        extension: extension.to_string(),
        stats: LineStats {
            total: code + comment + blank,
            code,
            comment,
            blank,
        },
    }
}

fn sample() -> Report {
    let mut report = Report::new(5);
    report.fold(record(".rs", 100, 10, 5));
    report.fold(record(".py", 40, 30, 2));
    report.fold(record(".rs", 20, 0, 1));
    report.fold(record(".md", 40, 0, 8));
    report
}

#[test]
fn fold_accumulates_per_extension() {
    let report = sample();
    let rs = report.get(".rs").unwrap();

    assert_eq!(
        *rs,
        ExtensionStats {
            files: 2,
            code: 120,
            comments: 10,
            blanks: 6,
        }
    );
    assert_eq!(report.len(), 3);
}

#[test]
fn totals_equal_sum_of_extensions() {
    let report = sample();
    let totals = report.totals();

    let sum = report
        .extensions()
        .fold(ExtensionStats::default(), |mut acc, (_, s)| {
            acc.files += s.files;
            acc.code += s.code;
            acc.comments += s.comments;
            acc.blanks += s.blanks;
            acc
        });

    assert_eq!(totals.total_files, sum.files);
    assert_eq!(totals.total_code, sum.code);
    assert_eq!(totals.total_comments, sum.comments);
    assert_eq!(totals.total_blanks, sum.blanks);
    assert_eq!(totals.total_files, 4);
}

#[test]
fn tracked_files_is_independent_of_folds() {
    let report = sample();
    assert_eq!(report.tracked_files(), 5);
}

#[test]
fn ranked_by_code_descending_with_stable_ties() {
    let report = sample();
    let ranked: Vec<&str> = report.ranked_by_code().into_iter().map(|(e, _)| e).collect();

    // .py and .md tie at 40; .py was seen first
    assert_eq!(ranked, vec![".rs", ".py", ".md"]);
}

#[test]
fn ranked_by_comments_descending_with_stable_ties() {
    let report = sample();
    let ranked: Vec<&str> = report
        .ranked_by_comments()
        .into_iter()
        .map(|(e, _)| e)
        .collect();

    assert_eq!(ranked, vec![".py", ".rs", ".md"]);
}

#[test]
fn extensions_iterate_in_first_seen_order() {
    let report = sample();
    let order: Vec<&str> = report.extensions().map(|(e, _)| e).collect();
    assert_eq!(order, vec![".rs", ".py", ".md"]);
}

#[test]
fn empty_report() {
    let report = Report::new(0);
    assert!(report.is_empty());
    assert!(report.ranked_by_code().is_empty());
    assert_eq!(*report.totals(), Totals::default());
}

#[test]
fn empty_file_still_counts_as_file() {
    let mut report = Report::new(1);
    report.fold(record(".sh", 0, 0, 0));

    assert_eq!(report.get(".sh").unwrap().files, 1);
    assert_eq!(report.totals().total_files, 1);
    assert_eq!(report.totals().total_code, 0);
}
