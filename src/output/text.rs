use std::fmt::Write;

use crate::error::Result;
use crate::lint::{Diagnostic, FileReport};

use super::{ReportFormatter, underline};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic, output: &mut String) {
        let violation = &diagnostic.violation;
        let label = self.paint(
            &format!("error at line {}", diagnostic.line_number),
            ansi::RED,
        );
        let _ = writeln!(output, "  {label}: {}", violation.message);
        let _ = writeln!(output, "  {}", diagnostic.line);
        let line_len = diagnostic.line.chars().count();
        let _ = writeln!(output, "  {}", underline(line_len, &violation.marks, '^'));
        if let Some(suggestion) = &violation.suggestion {
            let _ = writeln!(output, "  suggestion: '{suggestion}'");
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            if report.passed() {
                if self.verbose > 0 {
                    let status = self.paint("PASSED", ansi::GREEN);
                    let _ = writeln!(output, "✓ {status}: {}", report.path.display());
                }
                continue;
            }

            let _ = writeln!(output, "✗ {}", report.path.display());
            for diagnostic in &report.diagnostics {
                self.format_diagnostic(diagnostic, &mut output);
            }
        }

        let total = reports.len();
        let passed = reports.iter().filter(|r| r.passed()).count();
        let findings: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
        if !output.is_empty() {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "Summary: {total} file(s) checked, {passed} passed, {findings} finding(s)"
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
