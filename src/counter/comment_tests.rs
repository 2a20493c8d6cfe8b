use super::*;

#[test]
fn detects_prefix_at_start() {
    let detector = CommentDetector::new(&["//"]);
    assert!(detector.is_single_line_comment("// hello"));
    assert!(detector.is_single_line_comment("/// doc"));
    assert!(detector.is_single_line_comment("//"));
}

#[test]
fn ignores_embedded_prefix() {
    let detector = CommentDetector::new(&["//"]);
    assert!(!detector.is_single_line_comment("let x = 1; // trailing"));
    assert!(!detector.is_single_line_comment("/* block */"));
}

#[test]
fn any_prefix_matches() {
    let detector = CommentDetector::new(&["#", "--"]);
    assert!(detector.is_single_line_comment("# shell"));
    assert!(detector.is_single_line_comment("-- sql"));
    assert!(!detector.is_single_line_comment("select 1"));
}

#[test]
fn empty_prefix_set_never_matches() {
    let detector = CommentDetector::new(&[]);
    assert!(!detector.is_single_line_comment("// looks like a comment"));
    assert!(!detector.is_single_line_comment("# so does this"));
}
