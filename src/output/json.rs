use serde::Serialize;

use crate::error::Result;
use crate::lint::{Category, FileReport};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileEntry>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    findings: usize,
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    passed: bool,
    findings: Vec<FindingEntry>,
}

#[derive(Serialize)]
struct FindingEntry {
    line: usize,
    category: Category,
    message: String,
    text: String,
    marks: Vec<MarkEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

#[derive(Serialize)]
struct MarkEntry {
    start: usize,
    end: usize,
}

fn convert_report(report: &FileReport) -> FileEntry {
    let findings = report
        .diagnostics
        .iter()
        .map(|diagnostic| {
            let line_len = diagnostic.line.chars().count();
            FindingEntry {
                line: diagnostic.line_number,
                category: diagnostic.violation.category,
                message: diagnostic.violation.message.clone(),
                text: diagnostic.line.clone(),
                marks: diagnostic
                    .violation
                    .marks
                    .iter()
                    .map(|mark| {
                        let (start, end) = mark.columns(line_len);
                        MarkEntry { start, end }
                    })
                    .collect(),
                suggestion: diagnostic.violation.suggestion.clone(),
            }
        })
        .collect();

    FileEntry {
        path: report.path.to_string_lossy().replace('\\', "/"),
        passed: report.passed(),
        findings,
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let passed = reports.iter().filter(|r| r.passed()).count();
        let findings: usize = reports.iter().map(|r| r.diagnostics.len()).sum();

        let output = JsonOutput {
            summary: Summary {
                total_files: reports.len(),
                passed,
                failed: reports.len() - passed,
                findings,
            },
            files: reports.iter().map(convert_report).collect(),
        };

        let json = serde_json::to_string_pretty(&output)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
