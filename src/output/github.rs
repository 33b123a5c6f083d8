use std::fmt::Write;

use crate::error::Result;
use crate::lint::FileReport;

use super::{ReportFormatter, underline};

/// GitHub-Markdown friendly rendering for CI annotations: one fenced diff
/// block per diagnostic, grouped under a per-file header.
pub struct GithubFormatter;

impl ReportFormatter for GithubFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            for (i, diagnostic) in report.diagnostics.iter().enumerate() {
                if i == 0 {
                    let _ = writeln!(output, "## `🐛 {}`", report.path.display());
                } else {
                    let _ = writeln!(output, "\n---\n");
                }

                let violation = &diagnostic.violation;
                let line_len = diagnostic.line.chars().count();
                let _ = writeln!(output, "```diff");
                let _ = writeln!(output, "# Line {}:", diagnostic.line_number);
                let _ = writeln!(output, "- {}", diagnostic.line);
                let _ = writeln!(output, "  {}", underline(line_len, &violation.marks, '^'));
                let _ = writeln!(output, "@@ {} @@", violation.message);
                let _ = writeln!(output, "```");
                if let Some(suggestion) = &violation.suggestion {
                    let _ = writeln!(output, "> **Note**(**suggested**): `{suggestion}`");
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
