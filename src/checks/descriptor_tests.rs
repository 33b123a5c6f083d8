use super::*;

fn inspect(number: usize, text: &str) -> Option<Violation> {
    let mut check = DescriptorCheck::new();
    let mut ctx = Context::new();
    check.inspect(&mut ctx, &Line::classify(number, text))
}

#[test]
fn valid_header_passes() {
    assert!(inspect(1, "Filetype: IR signals file").is_none());
    assert!(inspect(2, "Version: 1").is_none());
    assert!(inspect(2, "Version: 42").is_none());
}

#[test]
fn wrong_first_line_fires_with_suggestion() {
    let violation = inspect(1, "Filetype: IR library file").expect("should fire");
    assert_eq!(violation.category, Category::Structural);
    assert!(violation.message.contains("Filetype: IR signals file"));
    assert_eq!(violation.suggestion.as_deref(), Some(FILE_HEADER));
    assert_eq!(violation.marks[0].columns(25), (0, 25));
}

#[test]
fn bad_version_line_fires_without_suggestion() {
    let violation = inspect(2, "Version: one").expect("should fire");
    assert!(violation.message.contains("second line"));
    assert!(violation.suggestion.is_none());
}

#[test]
fn version_must_be_all_digits() {
    assert!(inspect(2, "Version: 1x").is_some());
    assert!(inspect(2, "Version:1").is_some());
}

#[test]
fn later_lines_are_ignored() {
    assert!(inspect(3, "anything at all").is_none());
    assert!(inspect(17, "Version: not checked").is_none());
}

#[test]
fn suggestion_is_idempotent() {
    let fixed = inspect(1, "wrong")
        .and_then(|v| v.suggestion)
        .expect("has suggestion");
    assert!(inspect(1, &fixed).is_none());
}
