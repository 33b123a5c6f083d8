use std::path::PathBuf;

use super::*;
use crate::lint::{Category, Diagnostic, ExitDirective, FileReport, Mark, Violation};

fn sample_report() -> FileReport {
    FileReport {
        path: PathBuf::from("remotes/tv.ir"),
        diagnostics: vec![Diagnostic {
            line_number: 4,
            line: "name: POWER ".to_string(),
            violation: Violation {
                exit: ExitDirective::Continue,
                marks: vec![Mark::span(11, 12)],
                category: Category::Formatting,
                message: "line ends with whitespace".to_string(),
                suggestion: Some("name: POWER".to_string()),
            },
        }],
    }
}

fn clean_report(path: &str) -> FileReport {
    FileReport {
        path: PathBuf::from(path),
        diagnostics: Vec::new(),
    }
}

#[test]
fn failing_file_shows_line_and_underline() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&[sample_report()])
        .unwrap();
    assert!(output.contains("✗ remotes/tv.ir"));
    assert!(output.contains("error at line 4: line ends with whitespace"));
    assert!(output.contains("  name: POWER \n"));
    let caret_row = format!("\n  {}^\n", " ".repeat(11));
    assert!(output.contains(&caret_row));
    assert!(output.contains("suggestion: 'name: POWER'"));
}

#[test]
fn passed_files_are_hidden_by_default() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&[clean_report("a.ir")])
        .unwrap();
    assert!(!output.contains("a.ir"));
    assert!(output.contains("Summary: 1 file(s) checked, 1 passed, 0 finding(s)"));
}

#[test]
fn verbose_lists_passed_files() {
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&[clean_report("a.ir")])
        .unwrap();
    assert!(output.contains("✓ PASSED: a.ir"));
}

#[test]
fn summary_counts_files_and_findings() {
    let reports = [sample_report(), clean_report("b.ir")];
    let output = TextFormatter::new(ColorMode::Never).format(&reports).unwrap();
    assert!(output.contains("Summary: 2 file(s) checked, 1 passed, 1 finding(s)"));
}

#[test]
fn empty_run_still_prints_a_summary() {
    let output = TextFormatter::new(ColorMode::Never).format(&[]).unwrap();
    assert_eq!(output, "Summary: 0 file(s) checked, 0 passed, 0 finding(s)\n");
}

#[test]
fn colors_wrap_the_error_label() {
    let output = TextFormatter::new(ColorMode::Always)
        .format(&[sample_report()])
        .unwrap();
    assert!(output.contains("\x1b[31merror at line 4\x1b[0m"));
}

#[test]
fn never_mode_emits_no_escape_codes() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&[sample_report()])
        .unwrap();
    assert!(!output.contains('\x1b'));
}
