mod github;
mod json;
mod text;

pub use github::GithubFormatter;
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::lint::{FileReport, Mark};

/// Trait for rendering lint reports into an output format.
pub trait ReportFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Github,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "github" | "gh" => Ok(Self::Github),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// A row of `symbol` characters under the marked spans of a line.
#[must_use]
pub(crate) fn underline(line_len: usize, marks: &[Mark], symbol: char) -> String {
    let mut row = vec![' '; line_len];
    for mark in marks {
        let (start, end) = mark.columns(line_len);
        for cell in row.iter_mut().take(end.min(line_len)).skip(start) {
            *cell = symbol;
        }
    }
    // Keep the row tight so trailing blanks never pad the output.
    let used = row.iter().rposition(|&c| c != ' ').map_or(0, |i| i + 1);
    row.truncate(used);
    row.into_iter().collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
