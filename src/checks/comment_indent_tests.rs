use super::*;

fn inspect(text: &str) -> Option<Violation> {
    let mut check = CommentIndentCheck;
    let mut ctx = Context::new();
    check.inspect(&mut ctx, &Line::classify(1, text))
}

#[test]
fn passes_on_column_zero_marker() {
    assert!(inspect("# a comment").is_none());
}

#[test]
fn fires_on_indented_marker() {
    let violation = inspect("  # indented").expect("should fire");
    assert_eq!(violation.exit, ExitDirective::StopLine);
    assert_eq!(violation.marks, vec![Mark::span(0, 2)]);
    assert_eq!(violation.suggestion.as_deref(), Some("# indented"));
}

#[test]
fn suggestion_is_idempotent() {
    let violation = inspect("\t# tabbed").expect("should fire");
    let fixed = violation.suggestion.expect("has suggestion");
    assert!(inspect(&fixed).is_none());
}

#[test]
fn applies_to_comment_lines_only() {
    let check = CommentIndentCheck;
    assert!(check.applies_to(LineKind::Comment));
    assert!(!check.applies_to(LineKind::Normal));
}
