use super::*;
use crate::lint::Mark;

#[test]
fn underline_covers_the_span() {
    assert_eq!(underline(5, &[Mark::span(1, 3)], '^'), " ^^");
}

#[test]
fn underline_renders_every_mark() {
    let marks = [Mark::span(0, 1), Mark::span(4, 6)];
    assert_eq!(underline(8, &marks, '^'), "^   ^^");
}

#[test]
fn underline_resolves_line_end_marks() {
    assert_eq!(underline(4, &[Mark::to_line_end(2)], '^'), "  ^^");
}

#[test]
fn underline_of_empty_line_is_empty() {
    assert_eq!(underline(0, &[Mark::to_line_end(0)], '^'), "");
}

#[test]
fn underline_supports_other_symbols() {
    assert_eq!(underline(3, &[Mark::point(2)], '↑'), "  ↑");
}

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("github".parse::<OutputFormat>().unwrap(), OutputFormat::Github);
    assert_eq!("gh".parse::<OutputFormat>().unwrap(), OutputFormat::Github);
    assert_eq!("GitHub".parse::<OutputFormat>().unwrap(), OutputFormat::Github);
    assert!("yaml".parse::<OutputFormat>().is_err());
}
