use std::path::PathBuf;

use super::*;
use crate::lint::{Category, Diagnostic, ExitDirective, FileReport, Mark, Violation};

fn diagnostic(line_number: usize, message: &str, suggestion: Option<&str>) -> Diagnostic {
    Diagnostic {
        line_number,
        line: "name:POWER".to_string(),
        violation: Violation {
            exit: ExitDirective::Continue,
            marks: vec![Mark::point(4)],
            category: Category::Grammar,
            message: message.to_string(),
            suggestion: suggestion.map(String::from),
        },
    }
}

#[test]
fn renders_a_diff_block_per_diagnostic() {
    let report = FileReport {
        path: PathBuf::from("tv.ir"),
        diagnostics: vec![diagnostic(4, "missing space after ':'", Some("name: POWER"))],
    };
    let output = GithubFormatter.format(&[report]).unwrap();
    assert!(output.contains("## `🐛 tv.ir`"));
    assert!(output.contains("```diff\n# Line 4:\n- name:POWER\n"));
    assert!(output.contains("@@ missing space after ':' @@"));
    assert!(output.contains("> **Note**(**suggested**): `name: POWER`"));
}

#[test]
fn header_appears_once_with_separators_between() {
    let report = FileReport {
        path: PathBuf::from("tv.ir"),
        diagnostics: vec![
            diagnostic(4, "first", None),
            diagnostic(7, "second", None),
        ],
    };
    let output = GithubFormatter.format(&[report]).unwrap();
    assert_eq!(output.matches("## `🐛 tv.ir`").count(), 1);
    assert_eq!(output.matches("\n---\n").count(), 1);
    assert!(output.contains("# Line 7:"));
}

#[test]
fn clean_reports_produce_no_output() {
    let report = FileReport {
        path: PathBuf::from("ok.ir"),
        diagnostics: Vec::new(),
    };
    let output = GithubFormatter.format(&[report]).unwrap();
    assert!(output.is_empty());
}

#[test]
fn suggestion_note_is_omitted_without_suggestion() {
    let report = FileReport {
        path: PathBuf::from("tv.ir"),
        diagnostics: vec![diagnostic(4, "oops", None)],
    };
    let output = GithubFormatter.format(&[report]).unwrap();
    assert!(!output.contains("**suggested**"));
}
