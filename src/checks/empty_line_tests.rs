use super::*;

fn inspect(text: &str) -> Option<Violation> {
    let mut check = EmptyLineCheck;
    let mut ctx = Context::new();
    check.inspect(&mut ctx, &Line::classify(1, text))
}

#[test]
fn fires_on_empty_line() {
    let violation = inspect("").expect("should fire");
    assert_eq!(violation.exit, ExitDirective::StopLine);
    assert_eq!(violation.category, Category::Structural);
}

#[test]
fn fires_on_whitespace_only_line() {
    assert!(inspect("   \t").is_some());
}

#[test]
fn passes_on_content() {
    assert!(inspect("name: POWER").is_none());
}

#[test]
fn applies_to_normal_lines_only() {
    let check = EmptyLineCheck;
    assert!(check.applies_to(LineKind::Normal));
    assert!(!check.applies_to(LineKind::Comment));
}
